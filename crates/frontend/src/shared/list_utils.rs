/// Универсальные утилиты для списков (подсветка поиска, индикаторы сортировки, поле поиска)
use contracts::shared::table::SortDirection;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = highlight_segments(text, filter)
        .into_iter()
        .map(|(part, matched)| {
            if matched {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();
    view! { <>{parts}</> }.into_any()
}

/// Разбивает текст на куски `(текст, совпадение)`.
///
/// Offsets found in the lowercased text are reused on the original, so every char
/// must keep its UTF-8 width when lowercased; otherwise the text is returned whole.
pub fn highlight_segments(text: &str, filter: &str) -> Vec<(String, bool)> {
    let filter = filter.trim();
    let whole = vec![(text.to_string(), false)];
    if filter.is_empty() || text.is_empty() {
        return whole;
    }
    let width_preserved = text
        .chars()
        .all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8());
    if !width_preserved {
        return whole;
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();
    let mut parts = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push((text[last_pos..actual_pos].to_string(), false));
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push((text[actual_pos..match_end].to_string(), true));
        last_pos = match_end;
    }

    if parts.is_empty() {
        return whole;
    }
    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: Signal<String>,
    /// Задержка перед вызовом on_change, мс
    #[prop(optional, default = 300)]
    debounce_ms: u32,
) -> impl IntoView {
    // Локальное состояние для input (до debounce)
    let input_value = RwSignal::new(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    // внешний сброс (например, «Очистить всё» не трогает q, но back/forward — трогает)
    Effect::new(move |_| {
        let external = value.get();
        if untrack(|| input_value.get() != external) && pending.with_value(Option::is_none) {
            input_value.set(external);
        }
    });

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        // Отменяем предыдущий таймер, если есть
        if let Some(timeout) = pending.try_update_value(Option::take).flatten() {
            timeout.cancel();
        }
        let timeout = Timeout::new(debounce_ms, move || {
            pending.set_value(None);
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        if let Some(timeout) = pending.try_update_value(Option::take).flatten() {
            timeout.cancel();
        }
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class=move || if value.get().is_empty() { "search-input__field" } else { "search-input__field search-input__field--active" }
                placeholder=move || placeholder.get()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter>
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some(SortDirection::Ascending)), " ▲");
        assert_eq!(get_sort_indicator(Some(SortDirection::Descending)), " ▼");
        assert_eq!(get_sort_indicator(None), " ⇅");
        assert!(get_sort_class(None).ends_with("indicator"));
    }

    #[test]
    fn test_highlight_segments() {
        assert_eq!(
            highlight_segments("Blue Bag bag", "bag"),
            vec![
                ("Blue ".to_string(), false),
                ("Bag".to_string(), true),
                (" ".to_string(), false),
                ("bag".to_string(), true),
            ]
        );
        assert_eq!(highlight_segments("Lamp", "sofa"), vec![("Lamp".to_string(), false)]);
        assert_eq!(highlight_segments("سماعات", "سم")[0], ("سم".to_string(), true));
    }

    #[test]
    fn test_highlight_skips_width_changing_case() {
        // 'İ' (2 байта) -> "i̇" (3 байта), 'ẞ' (3) -> 'ß' (2): сумма длин совпадает
        let text = "İxẞ";
        assert_eq!(text.len(), text.to_lowercase().len());
        assert_eq!(highlight_segments(text, "x"), vec![(text.to_string(), false)]);
    }
}
