//! Каталог сообщений EN/AR: единая таблица `id -> (en, ar)` вместо словарей на каждой странице.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Направление текста для атрибута `dir`.
    pub fn dir(self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

const CATALOG: &[(&str, &str, &str)] = &[
    // common
    ("app.title", "Storefront", "المتجر"),
    ("app.admin", "Dashboard", "لوحة التحكم"),
    ("common.loading", "Loading...", "جار التحميل..."),
    ("common.actions", "Actions", "الإجراءات"),
    ("common.clear_all", "Clear all", "مسح الكل"),
    ("common.search", "Search", "بحث"),
    ("common.search_placeholder", "Search...", "ابحث..."),
    ("common.selected", "selected", "محدد"),
    ("common.delete_selected", "Delete selected", "حذف المحدد"),
    ("common.filters", "Filters", "الفلاتر"),
    ("common.status", "Status", "الحالة"),
    ("common.name", "Name", "الاسم"),
    ("common.created_at", "Created", "تاريخ الإنشاء"),
    ("common.language", "العربية", "English"),
    ("common.not_found", "Page not found", "الصفحة غير موجودة"),
    // table
    ("table.empty", "No data found", "لا توجد بيانات"),
    ("table.first_page", "First page", "الصفحة الأولى"),
    ("table.prev_page", "Previous page", "الصفحة السابقة"),
    ("table.next_page", "Next page", "الصفحة التالية"),
    ("table.last_page", "Last page", "الصفحة الأخيرة"),
    ("table.page_of", "Page", "صفحة"),
    // actions
    ("action.view", "View", "عرض"),
    ("action.edit", "Edit", "تعديل"),
    ("action.delete", "Delete", "حذف"),
    ("action.approve", "Approve", "قبول"),
    ("action.reject", "Reject", "رفض"),
    ("action.activate", "Activate", "تفعيل"),
    ("action.suspend", "Suspend", "إيقاف"),
    ("action.refund", "Refund", "استرداد"),
    // search
    ("search.title", "Search results", "نتائج البحث"),
    ("search.results", "products", "منتج"),
    ("search.sort", "Sort by", "ترتيب حسب"),
    ("search.no_results", "No products match your filters", "لا توجد منتجات مطابقة"),
    ("search.categories", "Categories", "الفئات"),
    ("search.all_categories", "All categories", "كل الفئات"),
    ("search.out_of_stock", "Out of stock", "غير متوفر"),
    ("sort.recommended", "Recommended", "موصى به"),
    ("sort.price_asc", "Price: low to high", "السعر: من الأقل إلى الأعلى"),
    ("sort.price_desc", "Price: high to low", "السعر: من الأعلى إلى الأقل"),
    ("sort.newest", "Newest", "الأحدث"),
    ("sort.rating", "Top rated", "الأعلى تقييماً"),
    ("facet.brand", "Brand", "العلامة التجارية"),
    ("facet.color", "Color", "اللون"),
    ("facet.size", "Size", "المقاس"),
    ("facet.price", "Price", "السعر"),
    ("facet.status", "Status", "الحالة"),
    ("color.black", "Black", "أسود"),
    ("color.white", "White", "أبيض"),
    ("color.red", "Red", "أحمر"),
    ("color.blue", "Blue", "أزرق"),
    ("color.green", "Green", "أخضر"),
    ("price.0-100", "Under 100", "أقل من 100"),
    ("price.100-500", "100 to 500", "من 100 إلى 500"),
    ("price.500+", "500 and above", "500 فأكثر"),
    // categories
    ("category.fashion", "Fashion", "أزياء"),
    ("category.men", "Men", "رجال"),
    ("category.women", "Women", "نساء"),
    ("category.shoes", "Shoes", "أحذية"),
    ("category.bags", "Bags", "حقائب"),
    ("category.electronics", "Electronics", "إلكترونيات"),
    ("category.audio", "Audio", "صوتيات"),
    ("category.headphones", "Headphones", "سماعات"),
    ("category.phones", "Phones", "هواتف"),
    ("category.home", "Home", "المنزل"),
    ("category.kitchen", "Kitchen", "المطبخ"),
    // admin nav
    ("nav.search", "Shop", "تسوق"),
    ("nav.products", "Products", "المنتجات"),
    ("nav.reviews", "Reviews", "التقييمات"),
    ("nav.tags", "Tags", "الوسوم"),
    ("nav.vendors", "Vendors", "البائعون"),
    ("nav.flash_sales", "Flash sales", "العروض السريعة"),
    ("nav.returns", "Returns", "المرتجعات"),
    ("nav.spec_tables", "Specification tables", "جداول المواصفات"),
    ("nav.pages", "Pages", "الصفحات"),
    // columns
    ("col.product", "Product", "المنتج"),
    ("col.brand", "Brand", "العلامة التجارية"),
    ("col.price", "Price", "السعر"),
    ("col.stock", "Stock", "المخزون"),
    ("col.rating", "Rating", "التقييم"),
    ("col.customer", "Customer", "العميل"),
    ("col.comment", "Comment", "التعليق"),
    ("col.slug", "Slug", "المعرف"),
    ("col.products_count", "Products", "عدد المنتجات"),
    ("col.email", "Email", "البريد الإلكتروني"),
    ("col.joined", "Joined", "تاريخ الانضمام"),
    ("col.discount", "Discount", "الخصم"),
    ("col.starts", "Starts", "يبدأ"),
    ("col.ends", "Ends", "ينتهي"),
    ("col.order", "Order", "الطلب"),
    ("col.reason", "Reason", "السبب"),
    ("col.amount", "Amount", "المبلغ"),
    ("col.rows", "Rows", "الصفوف"),
    ("col.title", "Title", "العنوان"),
    ("col.updated", "Updated", "آخر تحديث"),
    // statuses
    ("status.active", "Active", "نشط"),
    ("status.draft", "Draft", "مسودة"),
    ("status.archived", "Archived", "مؤرشف"),
    ("status.pending", "Pending", "قيد المراجعة"),
    ("status.approved", "Approved", "مقبول"),
    ("status.rejected", "Rejected", "مرفوض"),
    ("status.suspended", "Suspended", "موقوف"),
    ("status.scheduled", "Scheduled", "مجدول"),
    ("status.ended", "Ended", "منتهي"),
    ("status.requested", "Requested", "مطلوب"),
    ("status.refunded", "Refunded", "تم الاسترداد"),
    ("status.published", "Published", "منشور"),
];

/// Перевод по id; при отсутствии ключа возвращает сам id.
pub fn t(locale: Locale, id: &str) -> &str {
    match CATALOG.iter().find(|(key, _, _)| *key == id) {
        Some((_, en, ar)) => match locale {
            Locale::En => en,
            Locale::Ar => ar,
        },
        None => {
            log::warn!("missing translation: {}", id);
            id
        }
    }
}

pub fn has_message(id: &str) -> bool {
    CATALOG.iter().any(|(key, _, _)| *key == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_translates_both_locales() {
        assert_eq!(t(Locale::En, "search.sort"), "Sort by");
        assert_eq!(t(Locale::Ar, "search.sort"), "ترتيب حسب");
    }

    #[test]
    fn test_missing_key_falls_back_to_id() {
        assert_eq!(t(Locale::Ar, "Acme"), "Acme");
        assert!(!has_message("Acme"));
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut seen = HashSet::new();
        for (id, _, _) in CATALOG {
            assert!(seen.insert(*id), "duplicate message id {}", id);
        }
    }

    #[test]
    fn test_locale_parse_and_dir() {
        assert_eq!("AR".parse::<Locale>(), Ok(Locale::Ar));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.toggled(), Locale::Ar);
    }
}
