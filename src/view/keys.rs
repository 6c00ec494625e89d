//! Every dictionary key a page reads.

use crate::catalog::{
    MISSION_PILLARS,
    MISSION_STATS,
    ROADMAP_PHASES,
    RegionCatalog,
};
use crate::input::KEY_SEPARATOR;

/// Keys read directly by the header and the pages.
///
/// Keys derived from catalog data (region names, pillars, roadmap phases,
/// stat labels) are added by [`view_keys`].
pub const VIEW_KEYS: &[&str] = &[
    // header
    "nav.brand",
    "nav.actions",
    "nav.mission",
    "nav.purpose",
    "nav.join",
    "nav.donate",
    "nav.back",
    // hero
    "hero.subtitle",
    "hero.title_line1",
    "hero.title_line2",
    "hero.quote_title",
    "hero.quote_desc",
    "hero.watch_film",
    "hero.join_us",
    "hero.target_label",
    "hero.view_details",
    // actions map
    "actions.subtitle",
    "actions.title_line1",
    "actions.title_line2",
    "actions.quote_title",
    "actions.quote_desc",
    // mission
    "mission.title_line1",
    "mission.title_line2",
    // purpose
    "purpose.subtitle",
    "purpose.title_line1",
    "purpose.title_line2",
    "purpose.closing",
    // join
    "join.subtitle",
    "join.title",
    "join.desc",
    "join.form.email",
    "join.form.password",
    "join.form.shipping_label",
    "join.form.shipping_placeholder",
    "join.form.plan_label",
    "join.form.plan_placeholder",
    "join.form.submit",
    "join.security_note",
    // donate
    "donate.subtitle",
    "donate.title_line1",
    "donate.title_line2",
    "donate.desc",
    "donate.trust.transparency_title",
    "donate.trust.transparency_desc",
    "donate.trust.impact_title",
    "donate.trust.impact_desc",
    "donate.frequency.once",
    "donate.frequency.monthly",
    "donate.custom_placeholder",
    "donate.payment_method",
    "donate.submit",
    "donate.disclaimer",
    // news
    "news.back",
    "news.media",
    "news.empty",
    "news.cta.title",
    "news.cta.desc",
    "news.cta.button",
];

/// [`VIEW_KEYS`] plus the keys derived from `regions` and the landing
/// tables, sorted and deduplicated.
#[must_use]
pub fn view_keys(regions: &RegionCatalog) -> Vec<String> {
    let mut keys: Vec<String> = VIEW_KEYS.iter().map(|key| (*key).to_string()).collect();

    for record in regions.regions() {
        keys.push(record.name_key());
        keys.push(record.description_key());
    }
    keys.extend(MISSION_STATS.iter().map(|stat| stat.label_key.to_string()));
    for pillar in &MISSION_PILLARS {
        for leaf in ["title", "desc"] {
            keys.push(format!("{}{KEY_SEPARATOR}{leaf}", pillar.locale_key));
        }
    }
    for phase in &ROADMAP_PHASES {
        for leaf in ["year", "phase", "title", "desc"] {
            keys.push(format!("{}{KEY_SEPARATOR}{leaf}", phase.locale_key));
        }
    }

    keys.sort();
    keys.dedup();
    keys
}
