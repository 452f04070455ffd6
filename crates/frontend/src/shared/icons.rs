use leptos::prelude::*;

fn svg(size: u32, body: AnyView) -> AnyView {
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {body}
        </svg>
    }
    .into_any()
}

pub fn icon(name: &str) -> AnyView {
    match name {
        "products" => svg(20, view! {
            <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/>
            <path d="M3.27 6.96 12 12l8.73-5.04"/>
            <path d="M12 22V12"/>
        }.into_any()),
        "search" => svg(20, view! {
            <circle cx="11" cy="11" r="8"/>
            <path d="m21 21-4.35-4.35"/>
        }.into_any()),
        "star" => svg(20, view! {
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>
        }.into_any()),
        "tag" => svg(20, view! {
            <path d="M20.59 13.41 13.42 20.58a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z"/>
            <line x1="7" y1="7" x2="7.01" y2="7"/>
        }.into_any()),
        "store" => svg(20, view! {
            <path d="M3 22h18"/>
            <path d="M6 22V8l6-5 6 5v14"/>
            <rect x="9" y="13" width="6" height="9"/>
        }.into_any()),
        "zap" => svg(20, view! {
            <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>
        }.into_any()),
        "rotate-ccw" => svg(20, view! {
            <polyline points="1 4 1 10 7 10"/>
            <path d="M3.51 15a9 9 0 1 0 2.13-9.36L1 10"/>
        }.into_any()),
        "table" => svg(20, view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M3 9h18"/>
            <path d="M9 21V9"/>
        }.into_any()),
        "file-text" => svg(20, view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>
            <polyline points="14 2 14 8 20 8"/>
            <line x1="16" y1="13" x2="8" y2="13"/>
            <line x1="16" y1="17" x2="8" y2="17"/>
        }.into_any()),
        "globe" => svg(20, view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M2 12h20"/>
            <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/>
        }.into_any()),
        "menu" => svg(20, view! {
            <line x1="3" y1="6" x2="21" y2="6"/>
            <line x1="3" y1="12" x2="21" y2="12"/>
            <line x1="3" y1="18" x2="21" y2="18"/>
        }.into_any()),
        "filter" => svg(16, view! {
            <polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"/>
        }.into_any()),
        "x" => svg(14, view! {
            <line x1="18" y1="6" x2="6" y2="18"/>
            <line x1="6" y1="6" x2="18" y2="18"/>
        }.into_any()),
        "more-vertical" => svg(16, view! {
            <circle cx="12" cy="5" r="1"/>
            <circle cx="12" cy="12" r="1"/>
            <circle cx="12" cy="19" r="1"/>
        }.into_any()),
        "eye" => svg(16, view! {
            <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/>
            <circle cx="12" cy="12" r="3"/>
        }.into_any()),
        "edit" => svg(16, view! {
            <path d="M12 20h9"/>
            <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>
        }.into_any()),
        "trash" => svg(16, view! {
            <polyline points="3 6 5 6 21 6"/>
            <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
            <path d="M10 11v6"/>
            <path d="M14 11v6"/>
        }.into_any()),
        "check" => svg(16, view! {
            <polyline points="20 6 9 17 4 12"/>
        }.into_any()),
        "chevrons-left" => svg(16, view! {
            <polyline points="11 17 6 12 11 7"/>
            <polyline points="18 17 13 12 18 7"/>
        }.into_any()),
        "chevron-left" => svg(16, view! {
            <polyline points="15 18 9 12 15 6"/>
        }.into_any()),
        "chevron-right" => svg(16, view! {
            <polyline points="9 18 15 12 9 6"/>
        }.into_any()),
        "chevrons-right" => svg(16, view! {
            <polyline points="13 17 18 12 13 7"/>
            <polyline points="6 17 11 12 6 7"/>
        }.into_any()),
        "chevron-down" => svg(16, view! {
            <polyline points="6 9 12 15 18 9"/>
        }.into_any()),
        _ => svg(20, view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 8v4l3 3"/>
        }.into_any()),
    }
}
