/// Reusable UI components for the extension panel

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::cards::{Card, CardAction};

#[derive(Properties, PartialEq)]
pub struct ExtensionCardProps {
    pub card: Card,
    /// Emitted with (name, source url)
    pub on_install: Callback<(String, String)>,
    /// Emitted with the extension name
    pub on_delete: Callback<String>,
}

#[function_component(ExtensionCard)]
pub fn extension_card(props: &ExtensionCardProps) -> Html {
    let card = &props.card;

    // Running indicator is only meaningful for installed extensions
    let indicator = match card.running {
        Some(true) => html! { <span class="extension-status">{"▶"}</span> },
        Some(false) => html! { <span class="extension-status">{"⏹"}</span> },
        None => html! {},
    };

    let action = match &card.action {
        CardAction::Delete => {
            let name = card.name.clone();
            html! {
                <Button
                    variant={ButtonVariant::Danger}
                    onclick={props.on_delete.reform(move |_| name.clone())}
                >
                    {"🗑️ Delete"}
                </Button>
            }
        }
        CardAction::Install { url } => {
            let name = card.name.clone();
            let url = url.clone();
            html! {
                <Button
                    variant={ButtonVariant::Primary}
                    onclick={props.on_install.reform(move |_| (name.clone(), url.clone()))}
                >
                    {"📥 Install"}
                </Button>
            }
        }
    };

    html! {
        <div class="extension-card">
            <div class="extension-header">
                <span class="extension-name">{&card.name}</span>
                {indicator}
            </div>
            <div class="extension-desc">{&card.description}</div>
            <div class="extension-version">{format!("Version: {}", card.version)}</div>
            <div class="extension-based">{format!("Type: {}", card.based_on)}</div>
            <div class="extension-actions">
                {action}
            </div>
        </div>
    }
}

/// Placeholder card shown instead of an empty container.
#[function_component(NoExtensions)]
pub fn no_extensions() -> Html {
    html! {
        <div class="loading empty-state">
            {"No extensions"}
        </div>
    }
}
