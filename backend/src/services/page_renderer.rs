//! Server-side page rendering.
//!
//! The locale is always passed in by the caller (taken from the request
//! path); nothing here reads ambient request state.

use chrono::{Datelike, Utc};
use minijinja::{Environment, context};
use serde::Serialize;

use crate::models::{COMPANY_INFO, COMPANY_STATS, Locale, RESTAURANTS, Restaurant, SiteStrings};
use crate::services::locale_routing::{strip_locale, with_locale};
use crate::utils::ApiResult;

/// Endpoint the switcher links go through.
pub const SWITCH_ENDPOINT: &str = "/api/locale/switch";

#[derive(Debug, Clone, Copy)]
pub enum Page<'a> {
    Home,
    Brand(&'a Restaurant),
}

#[derive(Debug, Serialize)]
struct SwitcherLink {
    code: &'static str,
    name: &'static str,
    active: bool,
    href: String,
}

#[derive(Debug, Serialize)]
struct Alternate {
    lang: &'static str,
    href: String,
}

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> ApiResult<Self> {
        let mut env = Environment::new();
        env.add_template("layout.html", include_str!("../../templates/layout.html"))?;
        env.add_template("home.html", include_str!("../../templates/home.html"))?;
        env.add_template("brand.html", include_str!("../../templates/brand.html"))?;
        Ok(Self { env })
    }

    /// Render `page` in `locale`. `current_path` is the request path and is
    /// only used to build the switcher and alternate links.
    pub fn render(&self, page: Page<'_>, locale: Locale, current_path: &str) -> ApiResult<String> {
        let strings = SiteStrings::for_locale(locale);
        let switcher = switcher_links(locale, current_path);
        let alternates: Vec<Alternate> = Locale::ALL
            .into_iter()
            .map(|alt| Alternate {
                lang: alt.code(),
                href: with_locale(alt, &strip_locale(current_path)),
            })
            .collect();

        let base = context! {
            lang => locale.code(),
            dir => locale.direction().as_attr(),
            strings => strings,
            switcher => switcher,
            alternates => alternates,
            company => &*COMPANY_INFO,
            year => Utc::now().year(),
        };

        let html = match page {
            Page::Home => self.env.get_template("home.html")?.render(context! {
                stats => &*COMPANY_STATS,
                restaurants => &*RESTAURANTS,
                ..base
            })?,
            Page::Brand(restaurant) => self.env.get_template("brand.html")?.render(context! {
                restaurant => restaurant,
                ..base
            })?,
        };

        Ok(html)
    }
}

/// One link per supported locale, each pointing at the switch endpoint with
/// the current page as the origin. The active locale stays selectable.
fn switcher_links(active: Locale, current_path: &str) -> Vec<SwitcherLink> {
    let from = urlencoding::encode(current_path);
    Locale::options(active)
        .into_iter()
        .map(|option| SwitcherLink {
            code: option.code.code(),
            name: option.name,
            active: option.active,
            href: format!("{}?to={}&from={}", SWITCH_ENDPOINT, option.code.code(), from),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::find_restaurant;

    #[test]
    fn test_document_attributes_follow_locale() {
        let renderer = PageRenderer::new().unwrap();

        let ar = renderer.render(Page::Home, Locale::Ar, "/ar").unwrap();
        assert!(ar.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(ar.contains("الرئيسية") || ar.contains("المطاعم"));

        let en = renderer.render(Page::Home, Locale::En, "/en").unwrap();
        assert!(en.contains(r#"<html lang="en" dir="ltr">"#));
        assert!(en.contains("Our Numbers"));
    }

    #[test]
    fn test_switcher_marks_active_and_links_every_locale() {
        let renderer = PageRenderer::new().unwrap();
        let restaurant = find_restaurant("rest-1").unwrap();
        let html = renderer.render(Page::Brand(restaurant), Locale::En, "/en/brands/rest-1").unwrap();

        // The template engine escapes `/` and `&` inside attributes.
        assert!(html.contains(
            "&#x2f;api&#x2f;locale&#x2f;switch?to=ar&amp;from=%2Fen%2Fbrands%2Frest-1"
        ));
        assert!(html.contains(
            "&#x2f;api&#x2f;locale&#x2f;switch?to=en&amp;from=%2Fen%2Fbrands%2Frest-1"
        ));
        assert!(html.contains(r#"class="active" aria-current="true">English</a>"#));
        assert!(html.contains("العربية"));
        assert!(html.contains(r#"hreflang="ar" href="&#x2f;ar&#x2f;brands&#x2f;rest-1""#));
    }

    #[test]
    fn test_switcher_links() {
        let links = switcher_links(Locale::Ar, "/ar");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, "/api/locale/switch?to=en&from=%2Far");
        assert!(links[1].active);
    }

    #[test]
    fn test_request_path_cannot_break_out_of_attributes() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render(Page::Home, Locale::En, "/en/a\"><b>&x").unwrap();

        assert!(!html.contains("<b>"));
        assert!(html.contains(r#"hreflang="ar" href="&#x2f;ar&#x2f;a&quot;&gt;&lt;b&gt;&amp;x""#));
    }

    #[test]
    fn test_home_renders_every_nav_section() {
        let renderer = PageRenderer::new().unwrap();

        for locale in Locale::ALL {
            let html = renderer.render(Page::Home, locale, &format!("/{}", locale.code())).unwrap();
            for section in ["about", "restaurants", "locations", "history"] {
                assert!(html.contains(&format!("#{}\"", section)), "nav link {}", section);
                assert!(html.contains(&format!(r#"id="{}""#, section)), "section {}", section);
            }
            let strings = SiteStrings::for_locale(locale);
            assert!(html.contains(strings.contact));
            assert!(html.contains(strings.visit));
        }
    }

    #[test]
    fn test_locations_and_history_use_embedded_content() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render(Page::Home, Locale::En, "/en").unwrap();

        assert!(html.contains("mlat=33.3152&amp;mlon=44.3661"));
        assert!(html.contains("Since 2018"));
        assert!(html.contains(&COMPANY_INFO.mission));
        assert!(html.contains("Cultural preservation"));
        assert!(html.contains("<address>Mosul, Iraq</address>"));
    }
}
