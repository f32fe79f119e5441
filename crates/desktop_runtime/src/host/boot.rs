use leptos::{logging, spawn_local};

use crate::{config::load_assistant_config, host::DesktopHostContext};

pub(super) fn install_boot_hydration(host: DesktopHostContext) {
    logging::log!("desktop host strategy: {}", host.host_strategy_name());
    spawn_local(async move {
        match load_assistant_config(host.services().prefs.as_ref()).await {
            Ok(config) => {
                if config.credential().is_none() {
                    logging::warn!("assistant API key missing; replies will be disabled");
                }
                host.set_assistant_config(config);
            }
            Err(err) => logging::warn!("{err}; keeping build defaults"),
        }
    });
}
