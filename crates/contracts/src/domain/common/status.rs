/// Объявляет enum статуса с кодом для URL/фасетов и id сообщения в каталоге.
///
/// ```ignore
/// status_enum! {
///     pub enum TagStatus { Active => "active", Draft => "draft" }
/// }
/// ```
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Message id: `status.<code>`.
            pub fn label_id(self) -> &'static str {
                match self {
                    $($name::$variant => concat!("status.", $code)),+
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|s| s.code() == code)
            }

            /// Варианты для фасета `status`.
            pub fn facet(kind: $crate::shared::query_state::FacetKind) -> $crate::shared::query_state::FacetDescriptor {
                $crate::shared::query_state::FacetDescriptor::new("status", kind, "facet.status")
                    .with_options(
                        Self::ALL
                            .iter()
                            .map(|s| $crate::shared::query_state::FacetOption::new(s.code(), s.label_id()))
                            .collect(),
                    )
            }
        }
    };
}

pub(crate) use status_enum;

#[cfg(test)]
mod tests {
    use crate::shared::i18n::has_message;
    use crate::shared::query_state::FacetKind;

    status_enum! {
        pub enum SampleStatus { Active => "active", Draft => "draft" }
    }

    #[test]
    fn test_codes_and_labels() {
        assert_eq!(SampleStatus::Draft.code(), "draft");
        assert_eq!(SampleStatus::Active.label_id(), "status.active");
        assert!(has_message(SampleStatus::Draft.label_id()));
        assert_eq!(SampleStatus::from_code("active"), Some(SampleStatus::Active));
        assert_eq!(SampleStatus::from_code("gone"), None);
    }

    #[test]
    fn test_facet_options() {
        let facet = SampleStatus::facet(FacetKind::Single);
        assert_eq!(facet.key, "status");
        assert_eq!(facet.options.len(), 2);
        assert_eq!(facet.option_label("draft"), Some("status.draft"));
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&SampleStatus::Draft).unwrap();
        assert_eq!(json, "\"draft\"");
        let back: SampleStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(back, SampleStatus::Active);
    }
}
