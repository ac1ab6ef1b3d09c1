use ledgerview::{Dashboard, DashboardError, Notifier, Services};
use ledgerview::session::Redirector;
use tracing::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod console;
mod dom;
mod http;
mod storage;

/// Boots the dashboard once the document has been parsed.
pub fn start() {
    console_error_panic_hook::set_once();
    console::init_tracing();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        error!("no document; dashboard not started");
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            spawn_dashboard();
        }) as Box<dyn FnMut(_)>);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .is_err()
        {
            error!("failed to listen for DOMContentLoaded");
            return;
        }
        on_ready.forget();
    } else {
        spawn_dashboard();
    }
}

fn spawn_dashboard() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_dashboard().await {
            error!(error = %e, "dashboard failed to start");
        }
    });
}

async fn run_dashboard() -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let config = dom::load_config(&document);

    let tokens = storage::LocalStorageTokens;
    let browser = Browser { window };
    let http = http::FetchClient;
    let services = Services {
        tokens: &tokens,
        redirector: &browser,
        http: &http,
        notifier: &browser,
    };

    let dashboard = Dashboard::new(config, services);
    let outcome = dashboard
        .load(|cfg| dom::dashboard_ui(&document, cfg).map_err(DashboardError::Dom))
        .await;
    info!(?outcome, "dashboard load finished");
    Ok(())
}

/// Window-level effects: page redirect and blocking alerts.
struct Browser {
    window: web_sys::Window,
}

impl Redirector for Browser {
    fn redirect(&self, target: &str) {
        if self.window.location().set_href(target).is_err() {
            error!(url = %target, "location: set_href failed");
        }
    }
}

impl Notifier for Browser {
    fn alert(&self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            error!("window: alert failed");
        }
    }
}
