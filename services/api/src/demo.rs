use crate::infra::{default_screening_config, default_screening_service};
use clap::Args;
use concierge_hiring::error::AppError;
use concierge_hiring::scheduling::upcoming_timeslots;
use concierge_hiring::screening::{
    session_analytics, CandidateReport, ResumeUpload, ScreeningSubmission, SessionLog,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to the resume file (TXT or PDF)
    #[arg(long)]
    pub(crate) resume: PathBuf,
    /// Candidate name for the report and audit trail
    #[arg(long)]
    pub(crate) name: String,
    /// Role title used in the concierge script
    #[arg(long, default_value = "Guest Experience Supervisor")]
    pub(crate) role: String,
    /// Mark the candidate as a UAE national for Emiratisation tracking
    #[arg(long)]
    pub(crate) emirati: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Role title used for both sample candidates
    #[arg(long, default_value = "Guest Experience Supervisor")]
    pub(crate) role: String,
}

const AISHA_SAMPLE_RESUME: &str = "Aisha Khan. Guest experience team lead with eight years in \
luxury hospitality. Bilingual Arabic and English speaker. Ran front office and POS operations \
for a flagship mall property, coordinated stakeholder management across cross-functional vendor \
teams, and delivered weekly Excel dashboards with KPI reporting.";

const ARMAAN_SAMPLE_RESUME: &str = "Armaan Satish. Backend software engineer. Six years building \
distributed systems in Go and Rust, with a focus on storage engines, message queues, and \
infrastructure automation.";

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        resume,
        name,
        role,
        emirati,
    } = args;

    let data = std::fs::read(&resume)?;
    let file_name = resume
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let service = default_screening_service(&default_screening_config());
    let mut session = SessionLog::new();

    let report = service.score_candidate(
        &mut session,
        ScreeningSubmission {
            candidate_name: name,
            role_title: role,
            is_emirati: emirati,
            resume: ResumeUpload::File {
                name: file_name,
                data,
            },
        },
    )?;

    print_report(&report);

    println!("\nAudit row");
    match session.export_csv() {
        Ok(csv) => print!("{csv}"),
        Err(err) => println!("audit export unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { role } = args;

    println!("Concierge hiring demo");
    let service = default_screening_service(&default_screening_config());
    let mut session = SessionLog::new();

    for (name, resume, is_emirati) in [
        ("Aisha Khan", AISHA_SAMPLE_RESUME, true),
        ("Armaan Satish", ARMAAN_SAMPLE_RESUME, false),
    ] {
        println!("\nScoring {name}");
        let report = service.score_candidate(
            &mut session,
            ScreeningSubmission {
                candidate_name: name.to_string(),
                role_title: role.clone(),
                is_emirati,
                resume: ResumeUpload::Text(resume.to_string()),
            },
        )?;
        print_report(&report);
    }

    let analytics = session_analytics(&session);
    println!("\nSession analytics");
    println!("- {} candidates scored", analytics.total_candidates);
    println!(
        "- {} Emirati ({:.0}% share)",
        analytics.emirati_candidates, analytics.emirati_share_pct
    );
    println!("Score distribution:");
    for bucket in &analytics.score_distribution {
        println!("  - {}: {}", bucket.label, bucket.count);
    }

    println!("\nUpcoming concierge slots");
    for slot in upcoming_timeslots(3) {
        println!("- {slot}");
    }

    println!("\nAudit log (CSV export)");
    match session.export_csv() {
        Ok(csv) => print!("{csv}"),
        Err(err) => println!("audit export unavailable: {err}"),
    }

    Ok(())
}

fn print_report(report: &CandidateReport) {
    println!(
        "- Candidate {} -> fit score {} / 100",
        report.candidate_id.0, report.fit_score
    );
    println!("Explainability:");
    println!("{}", report.explanation);
    println!("Concierge call script:");
    println!("{}", report.script);
}
