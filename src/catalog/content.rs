//! Landing-page tables whose text lives in the dictionary.

/// A headline figure in the mission section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionStat {
    pub value: u32,
    pub label_key: &'static str,
}

pub static MISSION_STATS: [MissionStat; 4] = [
    MissionStat { value: 2, label_key: "mission.stats.cities" },
    MissionStat { value: 4, label_key: "mission.stats.projections" },
    MissionStat { value: 15, label_key: "mission.stats.kits" },
    MissionStat { value: 28, label_key: "mission.stats.activists" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionPillar {
    /// Display ordinal, e.g. `01`.
    pub number: &'static str,
    pub locale_key: &'static str,
}

pub static MISSION_PILLARS: [MissionPillar; 3] = [
    MissionPillar { number: "01", locale_key: "mission.pillars.1" },
    MissionPillar { number: "02", locale_key: "mission.pillars.2" },
    MissionPillar { number: "03", locale_key: "mission.pillars.3" },
];

/// One step of the roadmap; `year`, `phase`, `title` and `desc` hang off the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadmapPhase {
    pub locale_key: &'static str,
    pub is_final: bool,
}

pub static ROADMAP_PHASES: [RoadmapPhase; 3] = [
    RoadmapPhase { locale_key: "purpose.phases.1", is_final: false },
    RoadmapPhase { locale_key: "purpose.phases.2", is_final: false },
    RoadmapPhase { locale_key: "purpose.phases.3", is_final: true },
];
