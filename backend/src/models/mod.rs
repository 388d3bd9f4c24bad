pub mod content;
pub mod locale;

pub use content::{
    COMPANY_INFO, COMPANY_STATS, CompanyInfo, CompanyStats, RESTAURANTS, Restaurant, SiteContent,
    SiteStrings,
};
pub use locale::{Locale, LocaleOption, TextDirection};
