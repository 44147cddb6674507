use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};

use myhealth::AssessmentSession;
use myhealth::assessment::AssessmentCategory;
use myhealth::config::AppConfig;
use myhealth::content::{identify, outbreak, screening};
use myhealth::emergency::{FastSign, FastTriage};
use myhealth::passport::{BloodType, EmergencyCard, Passport, PassportStore};
use myhealth::storage::FileStore;

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = Instant::now();

    let config = AppConfig::from_env().context("resolving configuration")?;
    info!("Using data directory: {}", config.data_dir.display());

    // Passport store: load on start, save on update
    let store = FileStore::open_with(&config.passport_path(), config.pretty_json)
        .context("opening passport store")?;
    let mut passport_store = PassportStore::new(Box::new(store));

    let mut passport = passport_store.load_or_default();
    if passport_store.has_passport() {
        info!("Loaded passport for {}", passport.full_name);
    } else {
        warn!("No passport on file, creating a sample one");
        passport = Passport {
            full_name: "Juan dela Cruz".to_string(),
            emergency_contact: "(054) 473-2326".to_string(),
            blood_type: BloodType::OPositive,
            allergies: "None".to_string(),
        };
        passport.validate().context("validating passport")?;
        passport_store
            .save(&passport)
            .context("saving passport")?;
    }
    info!("Passport complete: {}", passport.is_complete());

    // Risk assessment walkthrough
    let mut session = AssessmentSession::new();
    session.select_category(AssessmentCategory::Cardiovascular);
    session.set_answer("age", "55");
    session.set_answer("smoker", "yes");
    session.set_answer("bmi", "32");
    session.set_answer("activityLevel", "sedentary");
    if !session.is_complete() {
        warn!("Assessment incomplete, unanswered: {:?}", session.unanswered());
    }
    let result = session.submit().context("no assessment selected")?;
    info!(
        "{} assessment: {} points, {} risk",
        AssessmentCategory::Cardiovascular,
        result.points,
        result.risk_level
    );
    info!("Guidance: {}", result.risk_level.guidance());
    info!(
        "Result payload: {}",
        serde_json::to_string(&result).context("encoding result")?
    );

    // Stroke triage: the first symptom starts the response timer
    let mut triage = FastTriage::new();
    triage.toggle(FastSign::Face);
    for _ in 0..95 {
        triage.tick();
    }
    info!(
        "Stroke response timer at {} - {}",
        triage.timer().formatted(),
        identify::STROKE_CALL_PROMPT
    );

    // Civic content summaries
    info!("{}", outbreak::outbreak_advisory());
    info!("{}", outbreak::reporting_notice());
    for hotspot in outbreak::hotspots() {
        info!(
            "Hotspot {} ({}): {}m marker",
            hotspot.name,
            hotspot.severity,
            hotspot.severity.marker_radius_m()
        );
    }

    let today = chrono::Local::now().date_naive();
    let upcoming = screening::upcoming(today);
    info!("{} screening services currently bookable", upcoming.len());
    for event in &upcoming {
        info!("  {} - {} ({})", event.title, event.date_label, event.location);
    }

    // Emergency card from whatever passport is on file
    let card = EmergencyCard::from_passport(&passport, passport_store.has_passport());
    info!(
        "LifeQR card ready: {} fields, {} of 64 cells filled",
        card.fields.len(),
        card.pattern.filled_count()
    );
    if card.placeholder_data {
        warn!("{}", EmergencyCard::placeholder_notice());
    }

    info!("Demo completed in {:?}", start.elapsed());
    Ok(())
}
