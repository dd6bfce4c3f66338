use yew::prelude::*;

fn outline(class: &'static str, body: Html) -> Html {
    html! {
        <svg
            class={class}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {body}
        </svg>
    }
}

pub fn moon() -> Html {
    outline("icon", html! { <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" /> })
}

pub fn sun() -> Html {
    outline(
        "icon",
        html! {
            <>
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2" />
                <path d="M12 20v2" />
                <path d="m4.93 4.93 1.41 1.41" />
                <path d="m17.66 17.66 1.41 1.41" />
                <path d="M2 12h2" />
                <path d="M20 12h2" />
                <path d="m6.34 17.66-1.41 1.41" />
                <path d="m19.07 4.93-1.41 1.41" />
            </>
        },
    )
}

pub fn mail() -> Html {
    outline(
        "icon",
        html! {
            <>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        },
    )
}

pub fn message_circle() -> Html {
    outline("icon", html! { <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z" /> })
}

pub fn file_text() -> Html {
    outline(
        "icon",
        html! {
            <>
                <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
                <path d="M14 2v4a2 2 0 0 0 2 2h4" />
                <path d="M10 9H8" />
                <path d="M16 13H8" />
                <path d="M16 17H8" />
            </>
        },
    )
}

/// Filled X (Twitter) mark.
pub fn x_logo() -> Html {
    html! {
        <svg class="icon icon-social" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z" />
        </svg>
    }
}
