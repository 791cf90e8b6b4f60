//! Seeds the assistant-teacher indicator catalog (W19/2568).
//!
//! Each indicator carries weighted evidence checks stored as sub-indicators. The
//! weights of one indicator sum to 100.

use sea_orm_migration::prelude::*;

use super::{
    m20260105_000015_create_indicator_table::Indicator,
    m20260105_000016_create_sub_indicator_table::SubIndicator,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

struct IndicatorSeed {
    code: &'static str,
    name: &'static str,
    aspect: &'static str,
    section: &'static str,
    from_round: i32,
    checks: &'static [CheckSeed],
}

struct CheckSeed {
    code: &'static str,
    name: &'static str,
    weight: i32,
    auto_detect: bool,
}

const fn check(
    code: &'static str,
    name: &'static str,
    weight: i32,
    auto_detect: bool,
) -> CheckSeed {
    CheckSeed {
        code,
        name,
        weight,
        auto_detect,
    }
}

const fn indicator(
    code: &'static str,
    name: &'static str,
    aspect: &'static str,
    section: &'static str,
    from_round: i32,
    checks: &'static [CheckSeed],
) -> IndicatorSeed {
    IndicatorSeed {
        code,
        name,
        aspect,
        section,
        from_round,
        checks,
    }
}

const PRO: &str = "PROFESSIONAL";
const SOC: &str = "SOCIAL";
const PER: &str = "PERSONAL";

const CATALOG: &[IndicatorSeed] = &[
    indicator("PRO_1.1", "1.1 Curriculum analysis", PRO, "LEARNING_MANAGEMENT", 1, &[
        check("CURR_ANALYSIS_DOC", "Curriculum, standards and indicator analysis document", 25, false),
        check("COURSE_DESC", "Course description", 25, false),
        check("UNIT_PLAN", "Learning units covering the content", 25, false),
        check("EVIDENCE_LINKED_SESSION", "Evidence linked to at least one teaching session", 25, true),
    ]),
    indicator("PRO_1.2", "1.2 Learning design", PRO, "LEARNING_MANAGEMENT", 1, &[
        check("LEARNING_DESIGN_DOC", "Lesson plans aligned with the course", 25, false),
        check("CONTEXT_ALIGNMENT", "Units fit the learners and school context", 25, false),
        check("STUDENT_ANALYSIS", "Individual learner analysis", 25, false),
        check("POST_TEACHING_NOTE", "Post-teaching notes", 25, true),
    ]),
    indicator("PRO_1.3", "1.3 Active learning activities", PRO, "LEARNING_MANAGEMENT", 1, &[
        check("HAS_SESSION", "At least one recorded teaching session", 25, true),
        check("HAS_TRANSCRIPT", "Session transcript with timecodes", 25, false),
        check("AL_SIGNALS", "Active learning signals such as questioning or group work", 25, false),
        check("REFLECTION_NOTE", "Reflection on results and improvements", 25, true),
    ]),
    indicator("PRO_1.4", "1.4 Media and technology", PRO, "LEARNING_MANAGEMENT", 1, &[
        check("MEDIA_SELECTION", "Media and technology chosen to fit the activity", 30, false),
        check("MEDIA_EXAMPLES", "Examples of media used in class", 35, false),
        check("STUDENT_THINKING_SKILLS", "Media helped learners build thinking skills", 35, false),
    ]),
    indicator("PRO_1.5", "1.5 Measurement and evaluation", PRO, "LEARNING_MANAGEMENT", 1, &[
        check("ASSESSMENT_TOOLS", "Varied assessment tools", 30, false),
        check("STANDARD_ALIGNMENT", "Assessment aligned with learning standards", 30, false),
        check("SCORE_RECORDS", "Score and result records", 20, false),
        check("CONTINUOUS_IMPROVEMENT", "Results used to keep improving learners", 20, false),
    ]),
    indicator("PRO_1.6", "1.6 Classroom atmosphere", PRO, "LEARNING_MANAGEMENT", 1, &[
        check("CLASSROOM_ATMOSPHERE", "Classroom atmosphere that supports learners", 35, false),
        check("THINKING_SKILLS_PROMOTE", "Promotes thinking, life and work skills", 35, false),
        check("IT_SKILLS_PROMOTE", "Promotes information and technology skills", 30, false),
    ]),
    indicator("PRO_1.7", "1.7 Digital technology", PRO, "LEARNING_MANAGEMENT", 1, &[
        check("ONLINE_LEARNING", "Online or digital-media teaching", 40, false),
        check("DIGITAL_TOOLS_USED", "Digital tools used in teaching", 30, false),
        check("STUDENT_DIGITAL_WORK", "Learner work made with digital technology", 30, false),
    ]),
    indicator("PRO_2.1", "2.1 Learner information", PRO, "LEARNING_SUPPORT", 1, &[
        check("STUDENT_INFO_SYSTEM", "Learner information records", 35, false),
        check("COURSE_INFO_SYSTEM", "Course information records", 30, false),
        check("INFO_USAGE_EVIDENCE", "Information used to support learning", 35, false),
    ]),
    indicator("PRO_2.2", "2.2 Learner support system", PRO, "LEARNING_SUPPORT", 1, &[
        check("STUDENT_CARE_SYSTEM", "Learner support system carried out", 30, false),
        check("INDIVIDUAL_DATA", "Individual learner data used", 25, false),
        check("HOME_VISIT", "Home visit or counselling records", 25, false),
        check("COLLABORATION", "Coordination with stakeholders", 20, false),
    ]),
    indicator("PRO_2.3", "2.3 Law and regulations", PRO, "LEARNING_SUPPORT", 1, &[
        check("FOUR_DEPT_KNOWLEDGE", "Knowledge of the four school administration areas", 25, false),
        check("PROCUREMENT_KNOWLEDGE", "Procurement, finance, supplies and records work", 25, false),
        check("EDUCATION_LAW", "Education policy and law", 25, false),
        check("WORK_ORDER", "Appointment orders or duty records", 25, false),
    ]),
    indicator("SOC_1", "Learning from mentors", SOC, "MENTORING", 3, &[
        check("MENTOR_LEARNING", "Learning from a mentor", 30, true),
        check("OBSERVATION_REPORT", "Teaching observation report", 35, true),
        check("MENTOR_APPLY", "Mentor advice applied to own teaching", 35, true),
    ]),
    indicator("SOC_2", "Professional learning community", SOC, "PLC", 3, &[
        check("PLC_EVIDENCE", "PLC participation records", 34, true),
        check("APPLY_TO_CLASS", "PLC outcomes applied in class", 33, false),
        check("RESULT_NOTE", "Notes on results after applying", 33, true),
    ]),
    indicator("PER_1.1", "Self-discipline", PER, "DISCIPLINE_ETHICS", 1, &[
        check("SELF_DISCIPLINE", "Follows rules, etiquette and customs", 50, false),
        check("DISCIPLINE_EVIDENCE", "Evidence or witness of conduct", 50, false),
    ]),
    indicator("PER_1.2", "Punctuality", PER, "DISCIPLINE_ETHICS", 1, &[
        check("PUNCTUAL_BEHAVIOR", "Punctual at work", 50, false),
        check("PUNCTUAL_EVIDENCE", "Attendance records", 50, false),
    ]),
    indicator("PER_1.3", "Dedication to service and learners", PER, "DISCIPLINE_ETHICS", 1, &[
        check("DEDICATE_TIME", "Dedicates time to service and learners", 50, false),
        check("DEDICATE_EVIDENCE", "Records of out-of-hours activities", 50, false),
    ]),
    indicator("PER_1.4", "Care for learners", PER, "DISCIPLINE_ETHICS", 1, &[
        check("STUDENT_CARE", "Cares for every learner consistently and fairly", 50, false),
        check("STUDENT_CARE_EVIDENCE", "Records of helping learners", 50, false),
    ]),
    indicator("PER_1.5", "Teamwork", PER, "DISCIPLINE_ETHICS", 1, &[
        check("TEAMWORK", "Keeps harmony and helps colleagues", 50, false),
        check("TEAMWORK_EVIDENCE", "Photos, records or certificates", 50, false),
    ]),
    indicator("PER_1.6", "Public service", PER, "DISCIPLINE_ETHICS", 1, &[
        check("PUBLIC_SERVICE", "Contributes to shared work until done", 50, false),
        check("PUBLIC_SERVICE_EVIDENCE", "Photos or orders", 50, false),
    ]),
    indicator("PER_1.7", "Thai culture and environment", PER, "DISCIPLINE_ETHICS", 1, &[
        check("CULTURE_ACTIVITY_1", "First culture or environment activity", 50, false),
        check("CULTURE_ACTIVITY_2", "Second culture or environment activity", 50, false),
    ]),
    indicator("PER_1.8", "Sufficiency economy", PER, "DISCIPLINE_ETHICS", 1, &[
        check("SUFFICIENCY_LIVING", "Lives by the sufficiency economy philosophy", 50, false),
        check("SUFFICIENCY_EVIDENCE", "Related activities or projects", 50, false),
    ]),
    indicator("PER_1.9", "Free of vice and drugs", PER, "DISCIPLINE_ETHICS", 1, &[
        check("NO_VICE", "Avoids vice and drugs", 50, false),
        check("ANTI_DRUG_CAMPAIGN", "Joins anti-drug campaigns", 50, false),
    ]),
    indicator("PER_1.10", "Role model", PER, "DISCIPLINE_ETHICS", 1, &[
        check("ROLE_MODEL", "Sets a good example for learners", 50, false),
        check("ROLE_MODEL_EVIDENCE", "Recognition from others", 50, false),
    ]),
    indicator("PER_1.11", "Professional honour", PER, "DISCIPLINE_ETHICS", 1, &[
        check("PROFESSION_HONOR", "Protects the reputation of the profession", 50, false),
        check("HONOR_CERTIFICATE", "At least one award or commendation", 50, false),
    ]),
    indicator("PER_2.1", "Thai and English", PER, "SELF_DEVELOPMENT", 3, &[
        check("THAI_TRAINING", "At least one Thai language course", 50, false),
        check("ENG_TRAINING", "At least one English language course", 50, false),
    ]),
    indicator("PER_2.2", "Digital technology skills", PER, "SELF_DEVELOPMENT", 3, &[
        check("DIGITAL_TRAINING", "Digital technology for education training", 50, false),
        check("DIGITAL_OUTPUT", "Work produced with technology", 50, false),
    ]),
    indicator("PER_2.3", "Personal finance", PER, "SELF_DEVELOPMENT", 3, &[
        check("FINANCE_TRAINING", "Financial planning training", 50, false),
        check("FINANCE_PLAN", "Savings or financial plan", 50, false),
    ]),
    indicator("PER_2.4", "Health", PER, "SELF_DEVELOPMENT", 3, &[
        check("HEALTH_ACTIVITY", "Sport, recreation or dhamma activities", 50, false),
        check("HEALTH_CHECK", "Annual health check", 50, false),
    ]),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut indicators = Query::insert();
        indicators.into_table(Indicator::Table).columns([
            Indicator::Code,
            Indicator::Name,
            Indicator::Aspect,
            Indicator::Section,
            Indicator::FromRound,
            Indicator::SortOrder,
            Indicator::IsActive,
        ]);

        let mut checks = Query::insert();
        checks.into_table(SubIndicator::Table).columns([
            SubIndicator::IndicatorCode,
            SubIndicator::Code,
            SubIndicator::Name,
            SubIndicator::Weight,
            SubIndicator::AutoDetect,
            SubIndicator::SortOrder,
            SubIndicator::IsActive,
        ]);

        for (order, seed) in (1i32..).zip(CATALOG) {
            indicators
                .values([
                    seed.code.into(),
                    seed.name.into(),
                    seed.aspect.into(),
                    seed.section.into(),
                    seed.from_round.into(),
                    order.into(),
                    true.into(),
                ])
                .map_err(seed_error)?;

            for (check_order, check) in (1i32..).zip(seed.checks) {
                checks
                    .values([
                        seed.code.into(),
                        check.code.into(),
                        check.name.into(),
                        check.weight.into(),
                        check.auto_detect.into(),
                        check_order.into(),
                        true.into(),
                    ])
                    .map_err(seed_error)?;
            }
        }

        manager.execute(indicators.to_owned()).await?;
        manager.execute(checks.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .execute(Query::delete().from_table(SubIndicator::Table).to_owned())
            .await?;
        manager
            .execute(Query::delete().from_table(Indicator::Table).to_owned())
            .await
    }
}

fn seed_error(err: sea_orm_migration::sea_query::error::Error) -> DbErr {
    DbErr::Custom(err.to_string())
}
