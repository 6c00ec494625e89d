//! Mission and roadmap sections of the landing page.

use crate::catalog::{
    MISSION_PILLARS,
    MISSION_STATS,
    ROADMAP_PHASES,
};
use crate::input::KEY_SEPARATOR;
use crate::locale::LocaleStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStat {
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPillar {
    pub number: &'static str,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPhase {
    pub year: String,
    pub phase: String,
    pub title: String,
    pub description: String,
    pub is_final: bool,
}

fn field(store: &LocaleStore, prefix: &str, leaf: &str) -> String {
    store.get_string(&format!("{prefix}{KEY_SEPARATOR}{leaf}")).to_string()
}

#[must_use]
pub fn resolve_mission_stats(store: &LocaleStore) -> Vec<ResolvedStat> {
    MISSION_STATS
        .iter()
        .map(|stat| ResolvedStat { value: stat.value, label: store.get_string(stat.label_key).to_string() })
        .collect()
}

#[must_use]
pub fn resolve_mission_pillars(store: &LocaleStore) -> Vec<ResolvedPillar> {
    MISSION_PILLARS
        .iter()
        .map(|pillar| ResolvedPillar {
            number: pillar.number,
            title: field(store, pillar.locale_key, "title"),
            description: field(store, pillar.locale_key, "desc"),
        })
        .collect()
}

#[must_use]
pub fn resolve_roadmap(store: &LocaleStore) -> Vec<ResolvedPhase> {
    ROADMAP_PHASES
        .iter()
        .map(|phase| ResolvedPhase {
            year: field(store, phase.locale_key, "year"),
            phase: field(store, phase.locale_key, "phase"),
            title: field(store, phase.locale_key, "title"),
            description: field(store, phase.locale_key, "desc"),
            is_final: phase.is_final,
        })
        .collect()
}
