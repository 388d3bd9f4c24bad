//! Embedded site content.
//!
//! Everything here is built once on first use and never mutated. Text shown
//! in page chrome is keyed by the closed [`Locale`] enum so a missing
//! translation is a compile error rather than a runtime lookup failure.

use once_cell::sync::Lazy;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Locale;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    /// `[latitude, longitude]`
    #[schema(value_type = Vec<f64>)]
    pub coordinates: [f64; 2],
    pub image: String,
    pub logo: String,
    pub cuisine_type: String,
    pub opening_hours: String,
    pub employee_count: u32,
    pub founded_year: u16,
    pub specialties: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub total_restaurants: u32,
    pub total_employees: u32,
    pub years_in_business: u32,
    pub locations: u32,
    pub countries_present: u32,
    pub annual_customers: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub tagline: String,
    pub short_description: String,
    pub headquarters: String,
    pub founded_year: u16,
    pub ceo_name: String,
    pub mission: String,
    pub vision: String,
    pub values: Vec<String>,
}

/// Payload of `GET /api/mock-data`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub company_info: CompanyInfo,
    pub restaurants: Vec<Restaurant>,
    pub company_stats: CompanyStats,
}

/// Translated page chrome for one locale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteStrings {
    pub site_name: &'static str,
    pub tagline: &'static str,
    pub home: &'static str,
    pub about: &'static str,
    pub restaurants: &'static str,
    pub locations: &'static str,
    pub history: &'static str,
    pub brands: &'static str,
    pub contact: &'static str,
    pub visit: &'static str,
    pub mission: &'static str,
    pub vision: &'static str,
    pub values: &'static str,
    pub language: &'static str,
    pub stats_title: &'static str,
    pub employees: &'static str,
    pub years: &'static str,
    pub countries: &'static str,
    pub annual_customers: &'static str,
    pub cuisine: &'static str,
    pub hours: &'static str,
    pub since: &'static str,
}

const STRINGS_EN: SiteStrings = SiteStrings {
    site_name: "Land of Franchise",
    tagline: "Bringing the authentic flavors of Iraq to the world",
    home: "Home",
    about: "About",
    restaurants: "Restaurants",
    locations: "Locations",
    history: "Our History",
    brands: "Brands",
    contact: "Contact",
    visit: "Visit Location",
    mission: "Our Mission",
    vision: "Our Vision",
    values: "Our Values",
    language: "Language",
    stats_title: "Our Numbers",
    employees: "Employees",
    years: "Years",
    countries: "Countries",
    annual_customers: "Annual Customers",
    cuisine: "Cuisine",
    hours: "Opening Hours",
    since: "Since",
};

const STRINGS_AR: SiteStrings = SiteStrings {
    site_name: "أرض الامتياز",
    tagline: "ننقل النكهات العراقية الأصيلة إلى العالم",
    home: "الرئيسية",
    about: "عن الشركة",
    restaurants: "المطاعم",
    locations: "المواقع",
    history: "تاريخنا",
    brands: "العلامات التجارية",
    contact: "اتصل بنا",
    visit: "زيارة الموقع",
    mission: "مهمتنا",
    vision: "رؤيتنا",
    values: "قيمنا",
    language: "اللغة",
    stats_title: "أرقامنا",
    employees: "موظفين",
    years: "سنوات",
    countries: "دول",
    annual_customers: "عملاء سنويًا",
    cuisine: "المطبخ",
    hours: "ساعات العمل",
    since: "منذ",
};

impl SiteStrings {
    pub const fn for_locale(locale: Locale) -> &'static SiteStrings {
        match locale {
            Locale::En => &STRINGS_EN,
            Locale::Ar => &STRINGS_AR,
        }
    }
}

pub static RESTAURANTS: Lazy<Vec<Restaurant>> = Lazy::new(|| {
    vec![
        Restaurant {
            id: "rest-1".into(),
            name: "Shawrma Land".into(),
            description: "Authentic Middle Eastern cuisine in a relaxed, modern setting.".into(),
            location: "Mosul, Iraq".into(),
            coordinates: [33.3152, 44.3661],
            image: "/_static/images/restaurants/shawrma-land.jpg".into(),
            logo: "/_static/images/restaurants/L2.jpg".into(),
            cuisine_type: "Middle Eastern".into(),
            opening_hours: "11:00 AM - 11:00 PM".into(),
            employee_count: 45,
            founded_year: 2018,
            specialties: "Syrian Shawrma & Fast Food".into(),
        },
        Restaurant {
            id: "rest-2".into(),
            name: "Lamassu".into(),
            description: "Fine dining that fuses traditional Iraqi and modern international cuisine."
                .into(),
            location: "Mosul, Iraq".into(),
            coordinates: [30.5085, 47.7832],
            image: "/_static/images/restaurants/lamassu.jpg".into(),
            logo: "/_static/images/restaurants/L1.jpg".into(),
            cuisine_type: "Iraqi Fusion".into(),
            opening_hours: "12:00 PM - 10:00 PM".into(),
            employee_count: 38,
            founded_year: 2022,
            specialties: "Luxury Food".into(),
        },
        Restaurant {
            id: "rest-3".into(),
            name: "Start Coffee".into(),
            description: "Specialty coffee and pastries inspired by Mesopotamian recipes.".into(),
            location: "Mosul, Iraq".into(),
            coordinates: [36.1911, 44.0091],
            image: "/_static/images/restaurants/start-coffee.jpg".into(),
            logo: "/_static/images/restaurants/L3.jpg".into(),
            cuisine_type: "Traditional Iraqi".into(),
            opening_hours: "11:00 AM - 11:00 PM".into(),
            employee_count: 52,
            founded_year: 2023,
            specialties: "All Kinds of Coffee".into(),
        },
    ]
});

pub static COMPANY_STATS: Lazy<CompanyStats> = Lazy::new(|| CompanyStats {
    total_restaurants: 3,
    total_employees: 135,
    years_in_business: 15,
    locations: 6,
    countries_present: 2,
    annual_customers: 250_000,
});

pub static COMPANY_INFO: Lazy<CompanyInfo> = Lazy::new(|| CompanyInfo {
    name: "Land Of Franchise".into(),
    tagline: STRINGS_EN.tagline.into(),
    short_description: "A restaurant group showcasing Iraqi culinary heritage with modern influences."
        .into(),
    headquarters: "Mosul, Iraq".into(),
    founded_year: 2018,
    ceo_name: "Ahmed Al-Jabouri".into(),
    mission: "To preserve and promote Iraqi cuisine through exceptional dining experiences.".into(),
    vision: "To become the global ambassador for Iraqi cuisine.".into(),
    values: vec![
        "Authenticity in every recipe".into(),
        "Quality ingredients and preparation".into(),
        "Exceptional hospitality".into(),
        "Cultural preservation".into(),
        "Community engagement".into(),
    ],
});

pub fn find_restaurant(id: &str) -> Option<&'static Restaurant> {
    RESTAURANTS.iter().find(|restaurant| restaurant.id == id)
}

pub fn site_content() -> SiteContent {
    SiteContent {
        company_info: COMPANY_INFO.clone(),
        restaurants: RESTAURANTS.clone(),
        company_stats: COMPANY_STATS.clone(),
    }
}
