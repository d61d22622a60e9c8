/// Extension manager panel: tabs, status slot, install/delete handlers

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::cards::{catalog_cards, installed_cards};
use crate::client::{validate_catalog_url, ApiClient};
use crate::extension_data::{Catalog, Extension};
use crate::ui::components::{ExtensionCard, NoExtensions};

const STATUS_CLEAR_MS: u32 = 3_000;
const CONNECTION_ERROR: &str = "Server connection error";
const EMPTY_CATALOG_URL: &str = "Enter the catalog JSON URL";

#[derive(Clone, PartialEq)]
enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

#[derive(Clone, PartialEq)]
enum ActiveTab {
    Installed,
    Available,
}

type StatusSlot = UseStateHandle<Option<StatusMessage>>;
type StatusTimer = Rc<RefCell<Option<Timeout>>>;

#[derive(Properties, PartialEq)]
pub struct PanelProps {
    /// Base URL of the extension backend, e.g. "http://localhost:5000/api".
    pub api_base: String,
}

#[function_component(Panel)]
pub fn panel(props: &PanelProps) -> Html {
    let client = use_memo(props.api_base.clone(), |base| ApiClient::new(base));
    let active_tab = use_state(|| ActiveTab::Installed);
    // None until the first successful load; a failed load never clears
    // previously fetched data
    let installed = use_state(|| None::<Vec<Extension>>);
    let catalog = use_state(|| None::<Catalog>);
    let catalog_url = use_state(String::new);
    let status = use_state(|| None::<StatusMessage>);
    let status_timer = use_mut_ref(|| None::<Timeout>);

    // Load the installed list on mount
    {
        let client = client.clone();
        let installed = installed.clone();
        let status = status.clone();
        let status_timer = status_timer.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                refresh_installed(&client, &installed, &status, &status_timer).await;
            });
            || ()
        });
    }

    // Catalog URL input
    let on_url_input = {
        let catalog_url = catalog_url.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                catalog_url.set(input.value());
            }
        })
    };

    // Load the remote catalog; requires a non-empty URL input
    let load_remote = {
        let client = client.clone();
        let catalog = catalog.clone();
        let catalog_url = catalog_url.clone();
        let status = status.clone();
        let status_timer = status_timer.clone();

        Callback::from(move |_: ()| {
            let requested = match validate_catalog_url(&catalog_url) {
                Some(url) => url.to_string(),
                None => {
                    show_status(
                        &status,
                        &status_timer,
                        EMPTY_CATALOG_URL.to_string(),
                        StatusKind::Error,
                    );
                    return;
                }
            };

            let client = client.clone();
            let catalog = catalog.clone();
            let status = status.clone();
            let status_timer = status_timer.clone();

            spawn_local(async move {
                match client.list_remote(&requested).await {
                    Ok(entries) => catalog.set(Some(entries)),
                    Err(_) => show_status(
                        &status,
                        &status_timer,
                        CONNECTION_ERROR.to_string(),
                        StatusKind::Error,
                    ),
                }
            });
        })
    };

    // Install handler: (name, source url)
    let on_install = {
        let client = client.clone();
        let installed = installed.clone();
        let status = status.clone();
        let status_timer = status_timer.clone();

        Callback::from(move |(name, source_url): (String, String)| {
            let client = client.clone();
            let installed = installed.clone();
            let status = status.clone();
            let status_timer = status_timer.clone();

            spawn_local(async move {
                match client.install(&name, &source_url).await {
                    Ok(outcome) if outcome.success => {
                        show_status(&status, &status_timer, outcome.message, StatusKind::Success);
                        refresh_installed(&client, &installed, &status, &status_timer).await;
                    }
                    Ok(outcome) => {
                        show_status(&status, &status_timer, outcome.message, StatusKind::Error);
                    }
                    Err(_) => show_status(
                        &status,
                        &status_timer,
                        CONNECTION_ERROR.to_string(),
                        StatusKind::Error,
                    ),
                }
            });
        })
    };

    // Delete handler: asks for confirmation first; declining is a silent no-op
    let on_delete = {
        let client = client.clone();
        let installed = installed.clone();
        let status = status.clone();
        let status_timer = status_timer.clone();

        Callback::from(move |name: String| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&format!("Delete extension \"{}\"?", name))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let client = client.clone();
            let installed = installed.clone();
            let status = status.clone();
            let status_timer = status_timer.clone();

            spawn_local(async move {
                match client.delete(&name).await {
                    Ok(outcome) if outcome.success => {
                        show_status(&status, &status_timer, outcome.message, StatusKind::Success);
                        refresh_installed(&client, &installed, &status, &status_timer).await;
                    }
                    Ok(outcome) => {
                        show_status(&status, &status_timer, outcome.message, StatusKind::Error);
                    }
                    Err(_) => show_status(
                        &status,
                        &status_timer,
                        CONNECTION_ERROR.to_string(),
                        StatusKind::Error,
                    ),
                }
            });
        })
    };

    // Tab click handlers; entering Available always refreshes the catalog
    let on_tab_click = {
        let active_tab = active_tab.clone();
        let load_remote = load_remote.clone();
        move |tab: ActiveTab| {
            let active_tab = active_tab.clone();
            let load_remote = load_remote.clone();
            Callback::from(move |_| {
                active_tab.set(tab.clone());
                if tab == ActiveTab::Available {
                    load_remote.emit(());
                }
            })
        }
    };

    // Host-application stubs: notification only, no real action here
    let stub = {
        let status = status.clone();
        let status_timer = status_timer.clone();
        move |text: &'static str| {
            let status = status.clone();
            let status_timer = status_timer.clone();
            Callback::from(move |_: MouseEvent| {
                show_status(&status, &status_timer, text.to_string(), StatusKind::Success);
            })
        }
    };
    let on_open_folder = stub("Opens in the host application");
    let on_reload_browser = stub("Browser will reload");
    let on_clear_cache = stub("Cache cleared");

    html! {
        <div class="container">
            <h1 class="panel-title">{"Extensions"}</h1>

            // Tab navigation
            <div class="pf-v5-c-tabs tabs-nav">
                <ul class="pf-v5-c-tabs__list">
                    <li class={if *active_tab == ActiveTab::Installed { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }}>
                        <button
                            class="pf-v5-c-tabs__link"
                            onclick={on_tab_click(ActiveTab::Installed)}
                        >
                            <span class="pf-v5-c-tabs__item-text">{"Installed"}</span>
                        </button>
                    </li>
                    <li class={if *active_tab == ActiveTab::Available { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }}>
                        <button
                            class="pf-v5-c-tabs__link"
                            onclick={on_tab_click(ActiveTab::Available)}
                        >
                            <span class="pf-v5-c-tabs__item-text">{"Available"}</span>
                        </button>
                    </li>
                </ul>
            </div>

            // Notification slot
            if let Some(msg) = (*status).clone() {
                <div class="message-top-margin">
                    {match msg.kind {
                        StatusKind::Success => html! {
                            <Alert r#type={AlertType::Success} title={msg.text} inline={true}>
                            </Alert>
                        },
                        StatusKind::Error => html! {
                            <Alert r#type={AlertType::Danger} title={msg.text} inline={true}>
                            </Alert>
                        },
                    }}
                </div>
            }

            // Tab content
            <div class="tab-pane-content">
                {match &*active_tab {
                    ActiveTab::Installed => html! {
                        <div class="extensions-list">
                            {render_installed(&installed, &on_install, &on_delete)}
                        </div>
                    },
                    ActiveTab::Available => html! {
                        <div class="flex-column-gap">
                            <div class="catalog-url-row">
                                <input
                                    type="text"
                                    placeholder="Catalog JSON URL..."
                                    value={(*catalog_url).clone()}
                                    oninput={on_url_input}
                                    class="catalog-url-input"
                                />
                                <Button
                                    variant={ButtonVariant::Secondary}
                                    onclick={load_remote.reform(|_| ())}
                                >
                                    {"🔄 Load"}
                                </Button>
                            </div>
                            <div class="extensions-list">
                                {render_catalog(&catalog, &on_install, &on_delete)}
                            </div>
                        </div>
                    },
                }}
            </div>

            // Host application actions (stubs in this panel)
            <div class="toolbar">
                <Button variant={ButtonVariant::Secondary} onclick={on_open_folder}>
                    {"📂 Open additions folder"}
                </Button>
                <Button variant={ButtonVariant::Secondary} onclick={on_reload_browser}>
                    {"🔄 Reload browser"}
                </Button>
                <Button variant={ButtonVariant::Secondary} onclick={on_clear_cache}>
                    {"🧹 Clear cache"}
                </Button>
            </div>

            <p class="footer-panel">
                {"Extension Panel v0.1.0"}
            </p>
        </div>
    }
}

fn render_installed(
    installed: &UseStateHandle<Option<Vec<Extension>>>,
    on_install: &Callback<(String, String)>,
    on_delete: &Callback<String>,
) -> Html {
    match &**installed {
        None => html! {
            <div class="loading-text-center">
                <Spinner />
                <p class="loading-text">{"Loading extensions..."}</p>
            </div>
        },
        Some(extensions) => {
            let cards = installed_cards(extensions);
            if cards.is_empty() {
                html! { <NoExtensions /> }
            } else {
                html! {
                    {for cards.into_iter().map(|card| {
                        let key = card.name.clone();
                        html! {
                            <ExtensionCard
                                key={key}
                                card={card}
                                on_install={on_install.clone()}
                                on_delete={on_delete.clone()}
                            />
                        }
                    })}
                }
            }
        }
    }
}

fn render_catalog(
    catalog: &UseStateHandle<Option<Catalog>>,
    on_install: &Callback<(String, String)>,
    on_delete: &Callback<String>,
) -> Html {
    match &**catalog {
        None => html! {
            <div class="loading">{"Catalog not loaded"}</div>
        },
        Some(entries) => {
            let cards = catalog_cards(entries);
            if cards.is_empty() {
                html! { <NoExtensions /> }
            } else {
                html! {
                    {for cards.into_iter().map(|card| {
                        let key = card.name.clone();
                        html! {
                            <ExtensionCard
                                key={key}
                                card={card}
                                on_install={on_install.clone()}
                                on_delete={on_delete.clone()}
                            />
                        }
                    })}
                }
            }
        }
    }
}

/// Fetch the installed list and replace the rendered state on success.
/// On failure the previous state is left untouched and only the status slot
/// reports the problem.
async fn refresh_installed(
    client: &ApiClient,
    installed: &UseStateHandle<Option<Vec<Extension>>>,
    status: &StatusSlot,
    status_timer: &StatusTimer,
) {
    match client.list_installed().await {
        Ok(extensions) => installed.set(Some(extensions)),
        Err(_) => show_status(
            status,
            status_timer,
            CONNECTION_ERROR.to_string(),
            StatusKind::Error,
        ),
    }
}

/// Show a message in the single status slot and arm a fresh auto-clear
/// timer. Replacing the slot drops the previous timer, so every message gets
/// the full display window.
fn show_status(status: &StatusSlot, status_timer: &StatusTimer, text: String, kind: StatusKind) {
    status.set(Some(StatusMessage { text, kind }));

    let status = status.clone();
    let timeout = Timeout::new(STATUS_CLEAR_MS, move || {
        status.set(None);
    });
    *status_timer.borrow_mut() = Some(timeout);
}
