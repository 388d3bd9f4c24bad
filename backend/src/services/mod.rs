pub mod locale_gatekeeper;
pub mod locale_routing;
pub mod locale_switch;
pub mod page_renderer;

pub use locale_gatekeeper::{GateDecision, Gatekeeper};
pub use locale_switch::{LocaleSwitch, SwitchOutcome};
pub use page_renderer::{Page, PageRenderer};
