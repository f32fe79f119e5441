use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop" />
        <Meta name="description" content="A browser desktop shell with windows, a dock, and an assistant." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=platform_host_web::build_host_services()>
            <DesktopShell />
        </DesktopProvider>
    }
}
