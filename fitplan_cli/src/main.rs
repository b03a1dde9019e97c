use chrono::Utc;
use clap::{Parser, Subcommand};
use fitplan_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Rule-based workout planning system", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or update the fitness profile
    Profile {
        /// Body weight in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Height in cm
        #[arg(long)]
        height: Option<f64>,

        /// Fitness goal (weight_loss, muscle_gain, flexibility, general_fitness)
        #[arg(long)]
        goal: Option<String>,

        /// Activity level (beginner, intermediate, advanced)
        #[arg(long)]
        level: Option<String>,

        /// Preferred workout duration in minutes
        #[arg(long)]
        duration: Option<u32>,
    },

    /// Generate a fresh weekly plan from the profile
    Generate {
        /// Seed the exercise shuffle for reproducible plans
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the active weekly plan
    Plan,

    /// Browse the exercise catalog
    Exercises {
        /// Filter by muscle group
        #[arg(long)]
        muscle: Option<String>,

        /// Filter by difficulty
        #[arg(long)]
        difficulty: Option<String>,

        /// Substring match on name or tags
        #[arg(long)]
        search: Option<String>,
    },

    /// Log a completed workout for a plan day
    Log {
        /// Plan day that was performed (monday..sunday)
        #[arg(long)]
        day: String,

        /// Actual duration in minutes (defaults to the profile preference)
        #[arg(long)]
        duration: Option<u32>,
    },

    /// Check the workout streak and adapt a day's intensity
    Adapt {
        /// Plan day to adapt (monday..sunday)
        #[arg(long)]
        day: String,
    },

    /// Show performance statistics
    Stats {
        /// Period in days (7, 30, 90) or "all"
        #[arg(long, default_value = "30")]
        period: String,
    },

    /// Roll up the session log to CSV
    Rollup {
        /// Remove processed log files after rollup
        #[arg(long)]
        cleanup: bool,
    },
}

struct Paths {
    profile: PathBuf,
    plan: PathBuf,
    log: PathBuf,
    csv: PathBuf,
    data_dir: PathBuf,
}

impl Paths {
    fn new(data_dir: PathBuf) -> Self {
        Self {
            profile: data_dir.join("profile.json"),
            plan: data_dir.join("plan.json"),
            log: data_dir.join("sessions.jsonl"),
            csv: data_dir.join("sessions.csv"),
            data_dir,
        }
    }
}

fn main() -> Result<()> {
    fitplan_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let paths = Paths::new(data_dir);

    match cli.command {
        Commands::Profile {
            weight,
            height,
            goal,
            level,
            duration,
        } => cmd_profile(&paths, weight, height, goal, level, duration),
        Commands::Generate { seed } => cmd_generate(&paths, seed),
        Commands::Plan => cmd_plan(&paths),
        Commands::Exercises {
            muscle,
            difficulty,
            search,
        } => cmd_exercises(muscle, difficulty, search),
        Commands::Log { day, duration } => cmd_log(&paths, &day, duration),
        Commands::Adapt { day } => cmd_adapt(&paths, &day, &config),
        Commands::Stats { period } => cmd_stats(&paths, &period),
        Commands::Rollup { cleanup } => cmd_rollup(&paths, cleanup),
    }
}

fn parse_weekday(s: &str) -> Result<Weekday> {
    Weekday::parse(s).ok_or_else(|| {
        Error::Validation(format!(
            "Unknown day: {}. Use monday through sunday",
            s
        ))
    })
}

fn cmd_profile(
    paths: &Paths,
    weight: Option<f64>,
    height: Option<f64>,
    goal: Option<String>,
    level: Option<String>,
    duration: Option<u32>,
) -> Result<()> {
    let no_updates = weight.is_none()
        && height.is_none()
        && goal.is_none()
        && level.is_none()
        && duration.is_none();

    if no_updates {
        let profile = Profile::load(&paths.profile)?;
        println!("Profile");
        println!("  Weight:   {} kg", profile.weight_kg);
        println!("  Height:   {} cm", profile.height_cm);
        println!("  Goal:     {}", profile.fitness_goal);
        println!("  Level:    {}", profile.activity_level);
        println!("  Duration: {} min", profile.workout_duration);
        return Ok(());
    }

    // Start from the stored profile when one exists so partial updates work
    let mut profile = match Profile::load(&paths.profile) {
        Ok(p) => p,
        Err(Error::NotFound(_)) => {
            let (Some(weight), Some(height), Some(duration)) = (weight, height, duration) else {
                return Err(Error::Validation(
                    "First-time setup needs --weight, --height and --duration".into(),
                ));
            };
            Profile {
                weight_kg: weight,
                height_cm: height,
                fitness_goal: FitnessGoal::GeneralFitness,
                activity_level: Difficulty::Beginner,
                workout_duration: duration,
            }
        }
        Err(e) => return Err(e),
    };

    if let Some(weight) = weight {
        profile.weight_kg = weight;
    }
    if let Some(height) = height {
        profile.height_cm = height;
    }
    if let Some(duration) = duration {
        profile.workout_duration = duration;
    }
    if let Some(goal) = goal {
        profile.fitness_goal = FitnessGoal::parse(&goal)
            .ok_or_else(|| Error::Validation(format!("Unknown goal: {}", goal)))?;
    }
    if let Some(level) = level {
        profile.activity_level = Difficulty::parse(&level)
            .ok_or_else(|| Error::Validation(format!("Unknown level: {}", level)))?;
    }

    profile.save(&paths.profile)?;
    println!("✓ Profile saved");
    Ok(())
}

fn cmd_generate(paths: &Paths, seed: Option<u64>) -> Result<()> {
    let profile = Profile::load(&paths.profile)?;
    profile.validate()?;

    let catalog = get_default_catalog();
    let problems = catalog.validate();
    if !problems.is_empty() {
        eprintln!("Catalog validation errors:");
        for problem in problems {
            eprintln!("  - {}", problem);
        }
        return Err(Error::Catalog("Invalid catalog".into()));
    }

    let pool = catalog.pool();
    let plan = match seed {
        Some(seed) => generate_plan(&profile, &pool, &mut StdRng::seed_from_u64(seed)),
        None => generate_plan(&profile, &pool, &mut rand::thread_rng()),
    };

    plan.save(&paths.plan)?;

    println!("✓ Generated '{}'", plan.name);
    println!(
        "  Projected weekly burn: ~{} kcal",
        plan.projected_weekly_calories
    );
    print_plan(&plan, catalog);
    Ok(())
}

fn cmd_plan(paths: &Paths) -> Result<()> {
    let plan = GeneratedPlan::load(&paths.plan)?;
    println!("{} ({})", plan.name, plan.goal);
    println!(
        "Projected weekly burn: ~{} kcal",
        plan.projected_weekly_calories
    );
    print_plan(&plan, get_default_catalog());
    Ok(())
}

fn print_plan(plan: &GeneratedPlan, catalog: &Catalog) {
    for day in &plan.days {
        println!();
        println!("{} - {}", day.day, day.focus);
        if day.is_rest_day {
            continue;
        }
        for exercise in &day.exercises {
            let name = catalog
                .exercises
                .get(&exercise.exercise_id)
                .map(|e| e.name.as_str())
                .unwrap_or(exercise.exercise_id.as_str());
            let adapted = match exercise.last_adapted {
                Some(date) => format!("  (adapted {})", date),
                None => String::new(),
            };
            println!(
                "  {} — {} sets x {}{}",
                name, exercise.sets, exercise.reps, adapted
            );
        }
    }
}

fn cmd_exercises(
    muscle: Option<String>,
    difficulty: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let muscle = match muscle {
        Some(ref m) => Some(
            MuscleGroup::parse(m)
                .ok_or_else(|| Error::Validation(format!("Unknown muscle group: {}", m)))?,
        ),
        None => None,
    };
    let difficulty = match difficulty {
        Some(ref d) => Some(
            Difficulty::parse(d)
                .ok_or_else(|| Error::Validation(format!("Unknown difficulty: {}", d)))?,
        ),
        None => None,
    };
    let search = search.map(|s| s.to_lowercase());

    let mut matches: Vec<&Exercise> = get_default_catalog()
        .exercises
        .values()
        .filter(|e| muscle.map_or(true, |m| e.muscle_group == m))
        .filter(|e| difficulty.map_or(true, |d| e.difficulty == d))
        .filter(|e| {
            search.as_ref().map_or(true, |term| {
                e.name.to_lowercase().contains(term)
                    || e.tags.iter().any(|t| t.to_lowercase().contains(term))
            })
        })
        .collect();
    matches.sort_by(|a, b| a.id.cmp(&b.id));

    if matches.is_empty() {
        println!("No exercises match.");
        return Ok(());
    }

    for exercise in matches {
        println!(
            "{:<24} {:<12} {:<14} {} (MET {})",
            exercise.name,
            exercise.muscle_group,
            exercise.difficulty,
            exercise.default_reps,
            exercise.met_value
        );
    }
    Ok(())
}

fn cmd_log(paths: &Paths, day: &str, duration: Option<u32>) -> Result<()> {
    let weekday = parse_weekday(day)?;
    let profile = Profile::load(&paths.profile)?;
    let plan = GeneratedPlan::load(&paths.plan)?;

    let plan_day = plan
        .day(weekday)
        .ok_or_else(|| Error::NotFound(format!("No plan day for {}", weekday)))?;

    if plan_day.is_rest_day {
        return Err(Error::Plan(format!(
            "{} is a rest day; nothing to log",
            weekday
        )));
    }

    let today = Utc::now().date_naive();
    let sessions = load_recent_sessions(&paths.log, &paths.csv, Some(1))?;
    if history::session_logged_on(&sessions, weekday, today) {
        println!("A session for {} was already logged today.", weekday);
        return Ok(());
    }

    let catalog = get_default_catalog();
    let efforts: Vec<calories::ExerciseEffort> = plan_day
        .exercises
        .iter()
        .map(|e| calories::ExerciseEffort {
            exercise_id: e.exercise_id.clone(),
            met_value: catalog.exercises.get(&e.exercise_id).map(|c| c.met_value),
            sets: e.sets,
            reps: e.reps.clone(),
            duration_seconds: e.duration_seconds,
        })
        .collect();

    let estimate = session_calories(Some(profile.weight_kg), &efforts);

    let completed: Vec<CompletedExercise> = plan_day
        .exercises
        .iter()
        .zip(&estimate.per_exercise)
        .map(|(e, (_, kcal))| CompletedExercise {
            exercise_id: e.exercise_id.clone(),
            sets_completed: e.sets,
            reps_completed: e.reps.clone(),
            duration_seconds: e.duration_seconds,
            calories_burned: kcal.round() as u32,
        })
        .collect();

    let session = SessionRecord {
        id: uuid::Uuid::new_v4(),
        workout_date: today,
        day: Some(weekday),
        duration_minutes: duration.unwrap_or(profile.workout_duration),
        total_calories: estimate.total.round() as u32,
        logged_at: Utc::now(),
        exercises: completed,
    };

    let mut log = SessionLog::new(&paths.log);
    log.append(&session)?;

    println!("✓ Logged {} session", weekday);
    println!("  Estimated burn: ~{} kcal", session.total_calories);
    Ok(())
}

fn cmd_adapt(paths: &Paths, day: &str, config: &Config) -> Result<()> {
    let weekday = parse_weekday(day)?;

    let sessions = load_recent_sessions(&paths.log, &paths.csv, None)?;
    let dates = history::distinct_workout_dates(&sessions);

    let today = Utc::now().date_naive();
    let result = adapt_day(&paths.plan, weekday, today, &dates, &config.adaptation)?;

    if !result.has_streak {
        println!(
            "No streak yet: {} consecutive day(s), {} more needed.",
            result.streak_days, result.days_needed
        );
        return Ok(());
    }

    if result.already_adapted {
        println!(
            "{} was already adapted today ({}-day streak). Come back tomorrow.",
            weekday, result.streak_days
        );
        return Ok(());
    }

    println!(
        "✓ {}-day streak! Increased intensity for {}:",
        result.streak_days, weekday
    );
    let catalog = get_default_catalog();
    for adj in &result.adjustments {
        let name = catalog
            .exercises
            .get(&adj.exercise_id)
            .map(|e| e.name.as_str())
            .unwrap_or(adj.exercise_id.as_str());
        println!(
            "  {}: {} -> {} sets, {} -> {}",
            name, adj.old_sets, adj.new_sets, adj.old_reps, adj.new_reps
        );
    }
    Ok(())
}

fn cmd_stats(paths: &Paths, period: &str) -> Result<()> {
    let days = match period {
        "all" => None,
        other => Some(other.parse::<i64>().map_err(|_| {
            Error::Validation(format!("Unknown period: {}. Use 7, 30, 90 or all", other))
        })?),
    };

    let sessions = load_recent_sessions(&paths.log, &paths.csv, days)?;
    let summary = summarize(&sessions, get_default_catalog());

    if summary.is_empty() {
        println!("No sessions in this period.");
        return Ok(());
    }

    println!("Sessions:       {}", summary.total_sessions);
    println!("Total time:     {} min", summary.total_minutes);
    println!("Total calories: {} kcal", summary.total_calories);
    println!(
        "Per session:    {:.0} min, {:.0} kcal",
        summary.avg_minutes_per_session, summary.avg_calories_per_session
    );

    if !summary.weekly.is_empty() {
        println!();
        println!("By week:");
        for week in &summary.weekly {
            println!(
                "  w/c {}: {} sessions, {} min, {} kcal",
                week.week_start, week.sessions, week.minutes, week.calories
            );
        }
    }

    if !summary.muscle_group_counts.is_empty() {
        println!();
        println!("Muscle groups:");
        for (group, count) in &summary.muscle_group_counts {
            println!("  {:<16} {}", group.to_string(), count);
        }
    }
    Ok(())
}

fn cmd_rollup(paths: &Paths, cleanup: bool) -> Result<()> {
    if !paths.log.exists() {
        println!("No session log found - nothing to roll up.");
        return Ok(());
    }

    let count = rollup::log_to_csv_and_archive(&paths.log, &paths.csv)?;

    println!("✓ Rolled up {} sessions to CSV", count);
    println!("  CSV: {}", paths.csv.display());

    if cleanup {
        let cleaned = rollup::cleanup_processed_logs(&paths.data_dir)?;
        if cleaned > 0 {
            println!("✓ Cleaned up {} processed log files", cleaned);
        }
    }

    Ok(())
}
