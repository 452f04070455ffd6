use crate::shared::i18n::use_i18n;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Цвет бейджа по коду статуса.
pub fn status_variant(code: &str) -> &'static str {
    match code {
        "active" | "approved" | "published" | "refunded" => "success",
        "pending" | "draft" | "scheduled" | "requested" => "warning",
        "rejected" | "suspended" | "archived" | "ended" => "error",
        _ => "neutral",
    }
}

/// Бейдж статуса: код (`active`, `pending`…) и переведённая подпись `status.<code>`.
#[component]
pub fn StatusBadge(code: &'static str, label_id: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <Badge variant=status_variant(code).to_string() class="badge--status".to_string()>
            {move || i18n.t(label_id)}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::status_variant;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("approved"), "success");
        assert_eq!(status_variant("pending"), "warning");
        assert_eq!(status_variant("suspended"), "error");
        assert_eq!(status_variant("unknown"), "neutral");
    }
}
