//! Static intervention library: per competency and development level, an
//! ordered list of interventions and the KPIs that track them.

use crate::types::DevelopmentLevel;
use teamassess_scoring::Competency;
use thiserror::Error;

/// Interventions and KPIs for one competency at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterventionSet {
    pub interventions: &'static [&'static str],
    pub kpis: &'static [&'static str],
}

/// The three level sets of a single competency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetencyInterventions {
    pub competency: Competency,
    pub priority: InterventionSet,
    pub developing: InterventionSet,
    pub sustain: InterventionSet,
}

impl CompetencyInterventions {
    pub fn level(&self, level: DevelopmentLevel) -> &InterventionSet {
        match level {
            DevelopmentLevel::Priority => &self.priority,
            DevelopmentLevel::Developing => &self.developing,
            DevelopmentLevel::Sustain => &self.sustain,
        }
    }
}

static EMPTY_SET: InterventionSet = InterventionSet {
    interventions: &[],
    kpis: &[],
};

pub static INTERVENTION_LIBRARY: &[CompetencyInterventions] = &[
    CompetencyInterventions {
        competency: Competency::AgileMindset,
        priority: InterventionSet {
            interventions: &[
                "Attend Agile fundamentals training workshop",
                "Shadow experienced Scrum Master during ceremonies",
                "Read 'Agile Manifesto' and discuss with team lead",
                "Participate in retrospective action planning",
                "Practice daily stand-up facilitation",
            ],
            kpis: &[
                "Retrospective action closure rate (target: >80%)",
                "Ceremony participation score (target: 4/5)",
            ],
        },
        developing: InterventionSet {
            interventions: &[
                "Join Agile community of practice",
                "Complete online Agile certification course",
                "Implement one process improvement per sprint",
            ],
            kpis: &[
                "Process improvement suggestions per month (target: 2+)",
                "Agile maturity self-assessment score (target: 4/5)",
            ],
        },
        sustain: InterventionSet {
            interventions: &[
                "Mentor junior team members on Agile practices",
                "Lead retrospective facilitation rotation",
            ],
            kpis: &[
                "Team Agile maturity score (target: maintain 4+/5)",
            ],
        },
    },
    CompetencyInterventions {
        competency: Competency::ProductManagement,
        priority: InterventionSet {
            interventions: &[
                "Implement backlog template with WSJF/value tags in Jira",
                "Attend Product Owner certification training",
                "Create user story writing workshop with team",
                "Establish regular stakeholder review cadence",
                "Practice story mapping techniques",
            ],
            kpis: &[
                "% backlog items with value tags (target: >90%)",
                "Sprint goal attainment rate (target: >80%)",
                "Story acceptance rate (target: >85%)",
            ],
        },
        developing: InterventionSet {
            interventions: &[
                "Join Product Management community",
                "Implement OKRs for product metrics",
                "Regular customer feedback sessions",
            ],
            kpis: &[
                "Customer satisfaction score (target: 4+/5)",
                "Feature adoption rate (target: >70%)",
            ],
        },
        sustain: InterventionSet {
            interventions: &[
                "Coach other Product Owners",
                "Lead product strategy sessions",
            ],
            kpis: &[
                "Product delivery velocity (target: maintain trend)",
            ],
        },
    },
    CompetencyInterventions {
        competency: Competency::Requirements,
        priority: InterventionSet {
            interventions: &[
                "INVEST story writing clinic with Business Analyst",
                "Create acceptance criteria template library",
                "Practice behavior-driven development (BDD) techniques",
                "Implement definition of ready checklist",
                "Regular story refinement sessions",
            ],
            kpis: &[
                "Story rework rate (target: <15%)",
                "Acceptance criteria completeness score (target: >90%)",
            ],
        },
        developing: InterventionSet {
            interventions: &[
                "Advanced requirements gathering training",
                "User journey mapping workshops",
                "Stakeholder interview techniques",
            ],
            kpis: &[
                "Requirements clarity score (target: 4+/5)",
                "Stakeholder satisfaction with requirements (target: >85%)",
            ],
        },
        sustain: InterventionSet {
            interventions: &[
                "Lead requirements review sessions",
                "Mentor team on story writing",
            ],
            kpis: &[
                "Team story quality score (target: maintain 4+/5)",
            ],
        },
    },
    CompetencyInterventions {
        competency: Competency::BusinessAnalysis,
        priority: InterventionSet {
            interventions: &[
                "Create lightweight data checklist for decisions",
                "Attend data analysis fundamentals training",
                "Implement decision log template",
                "Practice root cause analysis techniques",
                "Regular data review sessions with analysts",
            ],
            kpis: &[
                "Decision lead time (target: <5 days)",
                "% decisions with cited data (target: >80%)",
            ],
        },
        developing: InterventionSet {
            interventions: &[
                "Advanced analytics training",
                "Process mapping workshops",
                "Stakeholder analysis techniques",
            ],
            kpis: &[
                "Decision quality score (target: 4+/5)",
                "Process improvement identification rate (target: 2+/month)",
            ],
        },
        sustain: InterventionSet {
            interventions: &[
                "Lead decision-making frameworks",
                "Coach team on analytical thinking",
            ],
            kpis: &[
                "Team analytical capability score (target: maintain 4+/5)",
            ],
        },
    },
    CompetencyInterventions {
        competency: Competency::Stakeholdering,
        priority: InterventionSet {
            interventions: &[
                "Create stakeholder map and engagement plan",
                "Establish regular stakeholder communication cadence",
                "Practice difficult conversation techniques",
                "Implement RACI matrix for key decisions",
                "Join communication skills workshop",
            ],
            kpis: &[
                "Stakeholder satisfaction pulse (target: >4/5)",
                "Number of escalations (target: <2/month)",
            ],
        },
        developing: InterventionSet {
            interventions: &[
                "Advanced facilitation training",
                "Conflict resolution workshops",
                "Presentation skills development",
            ],
            kpis: &[
                "Meeting effectiveness score (target: 4+/5)",
                "Stakeholder engagement frequency (target: weekly)",
            ],
        },
        sustain: InterventionSet {
            interventions: &[
                "Mentor others on stakeholder management",
                "Lead cross-functional initiatives",
            ],
            kpis: &[
                "Team collaboration score (target: maintain 4+/5)",
            ],
        },
    },
    CompetencyInterventions {
        competency: Competency::ChangeInnovation,
        priority: InterventionSet {
            interventions: &[
                "Create change introduction playbook",
                "Implement one experiment per sprint",
                "Join innovation community of practice",
                "Practice change management techniques",
                "Regular 'innovation time' sessions",
            ],
            kpis: &[
                "Experiments run per quarter (target: 4+)",
                "Change adoption scores (target: >70%)",
            ],
        },
        developing: InterventionSet {
            interventions: &[
                "Design thinking workshops",
                "Innovation methodology training",
                "Cross-industry learning sessions",
            ],
            kpis: &[
                "Innovation ideas generated (target: 2+/month)",
                "Successful change implementations (target: >80%)",
            ],
        },
        sustain: InterventionSet {
            interventions: &[
                "Lead innovation initiatives",
                "Coach team on experimentation",
            ],
            kpis: &[
                "Team innovation score (target: maintain 4+/5)",
            ],
        },
    },
    CompetencyInterventions {
        competency: Competency::RiskCompliance,
        priority: InterventionSet {
            interventions: &[
                "Create risk/regulatory acceptance criteria template",
                "Attend compliance fundamentals training",
                "Implement risk register for product features",
                "Regular compliance review sessions",
                "Practice risk assessment techniques",
            ],
            kpis: &[
                "Compliance rejection rate (target: <10%)",
                "Early risk identification % (target: >90%)",
            ],
        },
        developing: InterventionSet {
            interventions: &[
                "Advanced risk management training",
                "Regulatory landscape workshops",
                "Audit preparation techniques",
            ],
            kpis: &[
                "Risk mitigation effectiveness (target: >85%)",
                "Compliance score (target: 4+/5)",
            ],
        },
        sustain: InterventionSet {
            interventions: &[
                "Lead risk assessment sessions",
                "Mentor team on compliance practices",
            ],
            kpis: &[
                "Team compliance awareness (target: maintain 4+/5)",
            ],
        },
    },
];

/// Library entry for a competency at a level.
///
/// Falls back to an empty set when the competency has no entry, which
/// [`validate_library`] rules out at startup.
pub fn interventions_for(
    competency: Competency,
    level: DevelopmentLevel,
) -> &'static InterventionSet {
    INTERVENTION_LIBRARY
        .iter()
        .find(|entry| entry.competency == competency)
        .map(|entry| entry.level(level))
        .unwrap_or(&EMPTY_SET)
}

/// KPIs tracked for a competency at a level.
pub fn competency_kpis(competency: Competency, level: DevelopmentLevel) -> &'static [&'static str] {
    interventions_for(competency, level).kpis
}

/// A hole in the intervention library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("intervention library has no entry for {0}")]
    MissingCompetency(Competency),
    #[error("intervention library lists {0} more than once")]
    DuplicateCompetency(Competency),
    #[error("{competency} has no interventions at the {level} level")]
    NoInterventions {
        competency: Competency,
        level: DevelopmentLevel,
    },
    #[error("{competency} has no KPIs at the {level} level")]
    NoKpis {
        competency: Competency,
        level: DevelopmentLevel,
    },
}

/// Check the static library covers every competency at every level.
pub fn validate_library() -> Result<(), LibraryError> {
    validate_entries(INTERVENTION_LIBRARY)
}

/// Check an arbitrary library table.
pub fn validate_entries(entries: &[CompetencyInterventions]) -> Result<(), LibraryError> {
    for competency in Competency::ALL {
        let mut matching = entries.iter().filter(|e| e.competency == competency);
        let Some(entry) = matching.next() else {
            return Err(LibraryError::MissingCompetency(competency));
        };
        if matching.next().is_some() {
            return Err(LibraryError::DuplicateCompetency(competency));
        }
        for level in DevelopmentLevel::ALL {
            let set = entry.level(level);
            if set.interventions.is_empty() {
                return Err(LibraryError::NoInterventions { competency, level });
            }
            if set.kpis.is_empty() {
                return Err(LibraryError::NoKpis { competency, level });
            }
        }
    }
    tracing::debug!(entries = entries.len(), "intervention library self-check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_library_is_complete() {
        assert_eq!(validate_library(), Ok(()));
        assert_eq!(INTERVENTION_LIBRARY.len(), 7);
    }

    #[test]
    fn test_level_list_lengths() {
        for entry in INTERVENTION_LIBRARY {
            assert_eq!(entry.priority.interventions.len(), 5, "{}", entry.competency);
            assert_eq!(entry.developing.interventions.len(), 3, "{}", entry.competency);
            assert_eq!(entry.sustain.interventions.len(), 2, "{}", entry.competency);
        }
    }

    #[test]
    fn test_lookup_by_level() {
        let set = interventions_for(Competency::RiskCompliance, DevelopmentLevel::Priority);
        assert_eq!(
            set.interventions[0],
            "Create risk/regulatory acceptance criteria template"
        );
        assert_eq!(
            competency_kpis(Competency::ProductManagement, DevelopmentLevel::Priority).len(),
            3
        );
        assert_eq!(
            competency_kpis(Competency::AgileMindset, DevelopmentLevel::Sustain),
            &["Team Agile maturity score (target: maintain 4+/5)"]
        );
    }

    #[test]
    fn test_detects_missing_and_empty_entries() {
        let partial = &INTERVENTION_LIBRARY[..6];
        assert_eq!(
            validate_entries(partial),
            Err(LibraryError::MissingCompetency(Competency::RiskCompliance))
        );

        let mut entries = INTERVENTION_LIBRARY.to_vec();
        entries[0].sustain.kpis = &[];
        assert_eq!(
            validate_entries(&entries),
            Err(LibraryError::NoKpis {
                competency: Competency::AgileMindset,
                level: DevelopmentLevel::Sustain,
            })
        );

        let mut doubled = INTERVENTION_LIBRARY.to_vec();
        doubled.push(INTERVENTION_LIBRARY[2]);
        assert_eq!(
            validate_entries(&doubled),
            Err(LibraryError::DuplicateCompetency(Competency::Requirements))
        );
    }
}
