// Components module - one focused render function per page region
//
// Regions rendered every frame:
// - Title bar: site name and bundle source
// - Banner: hero text over the particle field
// - Filter bar: category controls and the search input
// - Articles: the card list (or placeholder / load failure)
// - Sidebar: top posts, dashboards, tools
// - Status bar: filter label, counts, uptime, sponsor line, latest log
//
// Components take an immutable &App plus a Rect; all state mutation stays
// in the App and the event loop.

pub mod articles;
pub mod banner;
pub mod consent;
pub mod dashboards;
pub mod filter_bar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod tools;
pub mod top_posts;

pub use toast::Toast;
