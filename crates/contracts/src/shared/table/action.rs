use std::fmt;
use std::sync::Arc;

pub type ActionHandler<T> = Arc<dyn Fn(&T, usize) + Send + Sync>;
pub type Visibility<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Действие в меню строки.
pub struct RowAction<T> {
    pub label: String,
    pub icon: Option<&'static str>,
    handler: ActionHandler<T>,
    visible: Option<Visibility<T>>,
}

impl<T> RowAction<T> {
    pub fn new(label: impl Into<String>, handler: impl Fn(&T, usize) + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            icon: None,
            handler: Arc::new(handler),
            visible: None,
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn visible_when(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.visible = Some(Arc::new(predicate));
        self
    }

    pub fn is_visible(&self, row: &T) -> bool {
        self.visible.as_ref().map(|p| p(row)).unwrap_or(true)
    }

    /// Вызывает обработчик; паника обработчика не перехватывается.
    pub fn run(&self, row: &T, index: usize) {
        (self.handler)(row, index)
    }
}

impl<T> Clone for RowAction<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon,
            handler: Arc::clone(&self.handler),
            visible: self.visible.clone(),
        }
    }
}

impl<T> fmt::Debug for RowAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish()
    }
}

pub fn visible_actions<'a, T>(actions: &'a [RowAction<T>], row: &T) -> Vec<&'a RowAction<T>> {
    actions.iter().filter(|a| a.is_visible(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_visibility_predicate_filters_per_row() {
        let actions = vec![
            RowAction::new("view", |_: &i32, _| {}),
            RowAction::new("approve", |_: &i32, _| {}).visible_when(|row| *row > 0),
        ];
        assert_eq!(visible_actions(&actions, &1).len(), 2);
        let labels: Vec<_> = visible_actions(&actions, &-1)
            .into_iter()
            .map(|a| a.label.as_str())
            .collect();
        assert_eq!(labels, vec!["view"]);
    }

    #[test]
    fn test_run_passes_row_and_index() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in = Arc::clone(&seen);
        let action = RowAction::new("delete", move |row: &usize, index| {
            seen_in.store(row * 10 + index, Ordering::SeqCst);
        });
        action.run(&4, 2);
        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }
}
