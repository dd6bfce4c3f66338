mod browser;
mod icons;
mod pattern;

use web_sys::{window, MouseEvent};
use yew::prelude::*;

use self::browser::{follow, BrowserDocument, BrowserStorage};
use self::pattern::AnimatedPattern;
use crate::head::{sync_favicon, sync_social_meta};
use crate::site::{Link, BRAND, BRAND_TAGLINE, CHAT, EMAIL, HEADLINE, PRESENTATION, X_PROFILE};
use crate::theme::{restore_theme, toggle_theme, Theme};

fn on_link(link: Link) -> Callback<MouseEvent> {
    Callback::from(move |_| follow(&link))
}

fn sync_head_on_mount() {
    let document = BrowserDocument::current();
    let synced = document
        .page_url()
        .and_then(|url| sync_social_meta(&document, &url));
    if let Err(err) = synced {
        log::warn!("social meta not updated: {err}");
    }
}

#[derive(Properties, PartialEq)]
struct ContactButtonProps {
    link: Link,
    icon: Html,
}

#[function_component(ContactButton)]
fn contact_button(props: &ContactButtonProps) -> Html {
    html! {
        <button class="button button-outline" type="button" onclick={on_link(props.link)}>
            {props.icon.clone()}
            {props.link.label}
        </button>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(Theme::default);

    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let restored = restore_theme(&BrowserStorage::local(), &BrowserDocument::current());
            if let Some(restored) = restored {
                theme.set(restored);
            }
            sync_head_on_mount();
            || ()
        });
    }

    use_effect_with(*theme, |theme| {
        if let Err(err) = sync_favicon(&BrowserDocument::current(), *theme) {
            log::warn!("favicon not updated: {err}");
        }
        || ()
    });

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let document = BrowserDocument::current().with_transition();
            theme.set(toggle_theme(&BrowserStorage::local(), &document, *theme));
        })
    };

    html! {
        <div class="page">
            <div class="background-grid" aria-hidden="true"></div>

            <div class="corner corner-top-left">
                <img class="logo" src={(*theme).logo()} alt={BRAND} />
            </div>

            <div class="corner corner-top-right">
                <button
                    class="button button-ghost button-icon"
                    type="button"
                    aria-label="Toggle theme"
                    onclick={on_toggle}
                >
                    { if theme.is_dark() { icons::sun() } else { icons::moon() } }
                </button>
            </div>

            <footer class="corner corner-bottom-left footer-brand">
                <span>{BRAND}</span>
                <span class="footer-tagline">{BRAND_TAGLINE}</span>
            </footer>

            <div class="corner corner-bottom-right footer-social">
                <button
                    class="social-button"
                    type="button"
                    aria-label={X_PROFILE.label}
                    onclick={on_link(X_PROFILE)}
                >
                    {icons::x_logo()}
                </button>
            </div>

            <main class="content">
                <div class="message">
                    <div class="pattern-frame">
                        <AnimatedPattern />
                    </div>

                    <p class="headline">{HEADLINE}</p>

                    <div class="actions">
                        <ContactButton link={EMAIL} icon={icons::mail()} />
                        <ContactButton link={CHAT} icon={icons::message_circle()} />
                        <ContactButton link={PRESENTATION} icon={icons::file_text()} />
                    </div>
                </div>
            </main>
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log::error!("missing #app mount point");
        return;
    };

    log::info!("mounting {BRAND}");
    yew::Renderer::<App>::with_root(root).render();
}
