use leptos::{expect_context, provide_context, RwSignal};

/// The two display languages the console supports. Kept as a closed enum so
/// every translation branch is an exhaustive `match`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

/// Strings owned by the navigation shell itself (sidebar labels, header
/// controls). Pages keep their own string sets next to their tables.
pub struct ChromeText {
    pub mall_name: &'static str,
    pub dashboard: &'static str,
    pub admin: &'static str,
    pub sales: &'static str,
    pub inventory: &'static str,
    pub purchase: &'static str,
    pub payment: &'static str,
    pub issues: &'static str,
    pub logout: &'static str,
    pub switch_language: &'static str,
}

const CHROME_EN: ChromeText = ChromeText {
    mall_name: "Mall Magic",
    dashboard: "Dashboard",
    admin: "Admin",
    sales: "Sales",
    inventory: "Inventory",
    purchase: "Purchase",
    payment: "Payment",
    issues: "Issues",
    logout: "Logout",
    switch_language: "हिंदी",
};

const CHROME_HI: ChromeText = ChromeText {
    mall_name: "मॉल मैजिक",
    dashboard: "डैशबोर्ड",
    admin: "प्रशासन",
    sales: "बिक्री",
    inventory: "इन्वेंटरी",
    purchase: "खरीद",
    payment: "भुगतान",
    issues: "समस्याएं",
    logout: "लॉग आउट",
    switch_language: "English",
};

pub fn chrome(lang: Language) -> &'static ChromeText {
    match lang {
        Language::En => &CHROME_EN,
        Language::Hi => &CHROME_HI,
    }
}

/// The shell owns the language flag; pages read it through context. Not
/// persisted, so every fresh load starts in English.
pub fn provide_language() -> RwSignal<Language> {
    let language = leptos::create_rw_signal(Language::default());
    provide_context(language);
    language
}

pub fn use_language() -> RwSignal<Language> {
    expect_context::<RwSignal<Language>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_between_exactly_two_languages() {
        let start = Language::default();
        assert_eq!(start, Language::En);
        assert_eq!(start.toggled(), Language::Hi);
        assert_eq!(start.toggled().toggled(), Language::En);
    }

    #[test]
    fn tags_match_the_locale_codes() {
        assert_eq!(Language::En.tag(), "en");
        assert_eq!(Language::Hi.tag(), "hi");
    }
}
