//! Sidebar component with collapsible menu groups

use crate::layout::global_context::use_global_context;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label id, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "storefront",
            label: "app.title",
            icon: "store",
            items: vec![("/search", "nav.search", "search")],
        },
        MenuGroup {
            id: "admin",
            label: "app.admin",
            icon: "table",
            items: vec![
                ("/admin/products", "nav.products", "products"),
                ("/admin/reviews", "nav.reviews", "star"),
                ("/admin/tags", "nav.tags", "tag"),
                ("/admin/vendors", "nav.vendors", "store"),
                ("/admin/flash-sales", "nav.flash_sales", "zap"),
                ("/admin/returns", "nav.returns", "rotate-ccw"),
                ("/admin/spec-tables", "nav.spec_tables", "table"),
                ("/admin/pages", "nav.pages", "file-text"),
            ],
        },
    ]
}

/// Пункт активен, если текущий путь совпадает с ним или вложен в него (`/search/fashion`).
fn is_active_path(current: &str, item: &str) -> bool {
    current == item
        || current
            .strip_prefix(item)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let i18n = use_i18n();
    let expanded_groups = RwSignal::new(vec!["storefront", "admin"]);

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let MenuGroup { id: group_id, label: group_label, icon: group_icon, items } = group;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group_icon)}
                                <span>{move || i18n.t(group_label)}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&group_id))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {items.iter().map(|&(path, label, icon_name)| {
                                    view! {
                                        <a
                                            href=path
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || is_active_path(&ctx.path(), path)
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                ctx.navigate(path);
                                            }
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{move || i18n.t(label)}</span>
                                            </div>
                                        </a>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_path_matches_nested_segments() {
        assert!(is_active_path("/search", "/search"));
        assert!(is_active_path("/search/fashion/men", "/search"));
        assert!(!is_active_path("/searching", "/search"));
        assert!(!is_active_path("/admin/tags", "/admin/products"));
    }

    #[test]
    fn test_menu_items_have_translations() {
        for group in get_menu_groups() {
            assert!(contracts::shared::i18n::has_message(group.label));
            for (_, label, _) in group.items {
                assert!(contracts::shared::i18n::has_message(label), "{label}");
            }
        }
    }
}
