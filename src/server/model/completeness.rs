//! Evidence completeness scoring for the assessment rounds.
//!
//! An indicator scores the summed weights of its satisfied checks, so a fully
//! evidenced indicator scores 100. A manual check is satisfied by evidence tagged
//! with the indicator code or the check code. An auto-detected check is satisfied by
//! the teacher's program records, or by evidence tagged with the check code.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::IndicatorAspect;

use crate::{
    model::completeness::{
        AspectCompletenessDto, CheckResultDto, CompletenessStatus, CriterionResultDto,
        IndicatorCompletenessDto, PassCriteriaResultDto, PassThresholdDto, TeacherCompletenessDto,
    },
    server::model::{
        evidence::Evidence, indicator::Indicator, journal::Journal, mentoring::MentoringVisit,
    },
};

pub const FIRST_ROUND: i32 = 1;
pub const LAST_ROUND: i32 = 4;

/// Minimum indicator score counted as passed.
pub const PASSING_SCORE: u32 = 60;

const READY_SCORE: u32 = 80;
const DRAFT_SCORE: u32 = 50;

/// Journal phrases showing mentor advice was applied (Thai "supervision", "mentor").
const MENTOR_PHRASES: [&str; 3] = ["นิเทศ", "ครูพี่เลี้ยง", "mentor"];
const PLC_PHRASES: [&str; 1] = ["plc"];

/// Indicators that must pass per aspect for a span of rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassThreshold {
    pub first_round: i32,
    pub last_round: i32,
    pub professional: u64,
    /// `None` when the social aspect is not assessed.
    pub social: Option<u64>,
    pub personal: u64,
}

pub const PASS_THRESHOLDS: [PassThreshold; 2] = [
    PassThreshold {
        first_round: 1,
        last_round: 2,
        professional: 9,
        social: None,
        personal: 7,
    },
    PassThreshold {
        first_round: 3,
        last_round: 4,
        professional: 11,
        social: Some(3),
        personal: 11,
    },
];

impl PassThreshold {
    pub fn for_round(round: i32) -> &'static PassThreshold {
        if round >= PASS_THRESHOLDS[1].first_round {
            &PASS_THRESHOLDS[1]
        } else {
            &PASS_THRESHOLDS[0]
        }
    }

    pub fn into_dto(self) -> PassThresholdDto {
        PassThresholdDto {
            first_round: self.first_round,
            last_round: self.last_round,
            professional: self.professional,
            social: self.social,
            personal: self.personal,
            passing_score: PASSING_SCORE,
        }
    }
}

/// Defaults to round 1 and clamps into 1-4.
pub fn clamp_round(round: Option<i32>) -> i32 {
    round.unwrap_or(FIRST_ROUND).clamp(FIRST_ROUND, LAST_ROUND)
}

pub fn status_for(score: u32) -> CompletenessStatus {
    if score >= READY_SCORE {
        CompletenessStatus::Ready
    } else if score >= DRAFT_SCORE {
        CompletenessStatus::Draft
    } else {
        CompletenessStatus::Insufficient
    }
}

/// A teacher's records that checks are evaluated against.
#[derive(Debug, Clone, Default)]
pub struct TeacherRecords {
    pub evidence: Vec<Evidence>,
    pub journals: Vec<Journal>,
    pub visits: Vec<MentoringVisit>,
    pub plc_activity_count: u64,
}

impl TeacherRecords {
    /// Whether program records satisfy an auto-detected check.
    fn detects(&self, check_code: &str) -> bool {
        match check_code {
            "EVIDENCE_LINKED_SESSION" => !self.evidence.is_empty(),
            "HAS_SESSION" => self.evidence.iter().any(|e| e.video_url.is_some()),
            "POST_TEACHING_NOTE" | "REFLECTION_NOTE" => !self.journals.is_empty(),
            "MENTOR_LEARNING" => !self.visits.is_empty(),
            "OBSERVATION_REPORT" => self
                .visits
                .iter()
                .any(|v| has_text(&v.strengths) || has_text(&v.suggestions)),
            "MENTOR_APPLY" => self.journal_mentions(&MENTOR_PHRASES),
            "PLC_EVIDENCE" => self.plc_activity_count > 0,
            "RESULT_NOTE" => self.journal_mentions(&PLC_PHRASES),
            _ => false,
        }
    }

    fn journal_mentions(&self, phrases: &[&str]) -> bool {
        self.journals.iter().any(|journal| {
            let text = [
                Some(&journal.reflection_text),
                journal.success_story.as_ref(),
                journal.difficulty.as_ref(),
                journal.support_request.as_ref(),
            ]
            .into_iter()
            .flatten()
            .map(|t| t.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

            phrases.iter().any(|phrase| text.contains(phrase))
        })
    }

    fn tagged_with<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Evidence> + 'a {
        self.evidence
            .iter()
            .filter(move |e| e.indicator_codes.iter().any(|c| c == code))
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn mean(scores: impl Iterator<Item = u32>) -> u32 {
    let (sum, count) = scores.fold((0u64, 0u64), |(sum, count), score| {
        (sum + u64::from(score), count + 1)
    });
    if count == 0 {
        return 0;
    }

    (sum as f64 / count as f64).round() as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub code: String,
    pub name: String,
    pub weight: u32,
    pub passed: bool,
}

impl CheckResult {
    pub fn score(&self) -> u32 {
        if self.passed {
            self.weight
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorCompleteness {
    pub code: String,
    pub name: String,
    pub aspect: IndicatorAspect,
    pub score: u32,
    pub checks: Vec<CheckResult>,
    pub evidence_ids: Vec<i32>,
}

impl IndicatorCompleteness {
    pub fn passed(&self) -> bool {
        self.score >= PASSING_SCORE
    }

    pub fn into_dto(self) -> IndicatorCompletenessDto {
        IndicatorCompletenessDto {
            missing: self
                .checks
                .iter()
                .filter(|c| !c.passed)
                .map(|c| c.name.clone())
                .collect(),
            checks: self
                .checks
                .into_iter()
                .map(|c| CheckResultDto {
                    score: c.score(),
                    code: c.code,
                    name: c.name,
                    weight: c.weight,
                    passed: c.passed,
                })
                .collect(),
            status: status_for(self.score),
            code: self.code,
            name: self.name,
            aspect: self.aspect,
            score: self.score,
            evidence_ids: self.evidence_ids,
        }
    }
}

/// Scores one indicator's checks against a teacher's records.
pub fn evaluate_indicator(indicator: &Indicator, records: &TeacherRecords) -> IndicatorCompleteness {
    let subs = indicator.sub_indicators.as_deref().unwrap_or_default();
    let tagged_indicator = records.tagged_with(&indicator.code).next().is_some();

    let checks: Vec<CheckResult> = subs
        .iter()
        .map(|sub| {
            let tagged_check = records.tagged_with(&sub.code).next().is_some();
            let passed = if sub.auto_detect {
                records.detects(&sub.code) || tagged_check
            } else {
                tagged_indicator || tagged_check
            };

            CheckResult {
                code: sub.code.clone(),
                name: sub.name.clone(),
                weight: sub.weight.max(0) as u32,
                passed,
            }
        })
        .collect();

    let mut evidence_ids: Vec<i32> = Vec::new();
    let codes = std::iter::once(indicator.code.as_str()).chain(subs.iter().map(|s| s.code.as_str()));
    for code in codes {
        for evidence in records.tagged_with(code) {
            if !evidence_ids.contains(&evidence.id) {
                evidence_ids.push(evidence.id);
            }
        }
    }

    IndicatorCompleteness {
        code: indicator.code.clone(),
        name: indicator.name.clone(),
        aspect: indicator.aspect,
        score: checks.iter().map(CheckResult::score).sum::<u32>().min(100),
        checks,
        evidence_ids,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AspectCompleteness {
    pub aspect: IndicatorAspect,
    pub score: u32,
    pub indicator_count: u64,
    pub passed_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criterion {
    pub required: u64,
    pub actual: u64,
}

impl Criterion {
    pub fn passed(&self) -> bool {
        self.actual >= self.required
    }

    fn into_dto(self) -> CriterionResultDto {
        CriterionResultDto {
            required: self.required,
            actual: self.actual,
            passed: self.passed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PassCriteria {
    pub professional: Criterion,
    pub social: Option<Criterion>,
    pub personal: Criterion,
}

impl PassCriteria {
    pub fn overall(&self) -> bool {
        self.professional.passed()
            && self.social.is_none_or(|c| c.passed())
            && self.personal.passed()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherCompleteness {
    pub teacher_id: i32,
    pub teacher_name: String,
    pub assessment_round: i32,
    pub generated_at: DateTime<Utc>,
    pub score: u32,
    pub aspects: Vec<AspectCompleteness>,
    pub indicators: Vec<IndicatorCompleteness>,
    pub pass_criteria: PassCriteria,
}

impl TeacherCompleteness {
    /// Scores every catalog indicator in the round, in catalog order.
    pub fn evaluate(
        teacher_id: i32,
        teacher_name: String,
        round: i32,
        catalog: &[Indicator],
        records: &TeacherRecords,
    ) -> Self {
        let indicators: Vec<IndicatorCompleteness> = catalog
            .iter()
            .filter(|i| i.in_round(round))
            .map(|i| evaluate_indicator(i, records))
            .collect();

        let aspects: Vec<AspectCompleteness> = [
            IndicatorAspect::Professional,
            IndicatorAspect::Social,
            IndicatorAspect::Personal,
        ]
        .into_iter()
        .filter_map(|aspect| {
            let items: Vec<&IndicatorCompleteness> =
                indicators.iter().filter(|i| i.aspect == aspect).collect();
            if items.is_empty() {
                return None;
            }

            Some(AspectCompleteness {
                aspect,
                score: mean(items.iter().map(|i| i.score)),
                indicator_count: items.len() as u64,
                passed_count: items.iter().filter(|i| i.passed()).count() as u64,
            })
        })
        .collect();

        let threshold = PassThreshold::for_round(round);
        // Thresholds never exceed the indicators the round actually scores
        let criterion = |aspect: IndicatorAspect, required: u64| {
            let tally = aspects.iter().find(|a| a.aspect == aspect);
            Criterion {
                required: required.min(tally.map_or(0, |a| a.indicator_count)),
                actual: tally.map_or(0, |a| a.passed_count),
            }
        };
        let pass_criteria = PassCriteria {
            professional: criterion(IndicatorAspect::Professional, threshold.professional),
            social: threshold
                .social
                .map(|required| criterion(IndicatorAspect::Social, required)),
            personal: criterion(IndicatorAspect::Personal, threshold.personal),
        };

        Self {
            teacher_id,
            teacher_name,
            assessment_round: round,
            generated_at: Utc::now(),
            score: mean(indicators.iter().map(|i| i.score)),
            aspects,
            indicators,
            pass_criteria,
        }
    }

    pub fn into_dto(self) -> TeacherCompletenessDto {
        let overall = self.pass_criteria.overall();

        TeacherCompletenessDto {
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
            assessment_round: self.assessment_round,
            generated_at: self.generated_at,
            score: self.score,
            status: status_for(self.score),
            aspects: self
                .aspects
                .into_iter()
                .map(|a| AspectCompletenessDto {
                    aspect: a.aspect,
                    score: a.score,
                    status: status_for(a.score),
                    indicator_count: a.indicator_count,
                    passed_count: a.passed_count,
                })
                .collect(),
            indicators: self
                .indicators
                .into_iter()
                .map(IndicatorCompleteness::into_dto)
                .collect(),
            pass_criteria: PassCriteriaResultDto {
                professional: self.pass_criteria.professional.into_dto(),
                social: self.pass_criteria.social.map(Criterion::into_dto),
                personal: self.pass_criteria.personal.into_dto(),
                overall,
            },
        }
    }
}
