//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // The queue is cleared before the drain so effects dispatched from inside the drain land in a
    // fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
