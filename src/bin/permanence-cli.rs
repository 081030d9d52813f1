#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use permanence::{
    io,
    notification::{prepare_reminder, TextReminder},
    scheduler::ViolationKind,
    storage::{JsonStorage, Storage},
    PlanningConfig,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planification des permanences du week-end
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de configuration (mois, employés, indisponibilités)
    #[arg(long, global = true, default_value = "permanence.json")]
    config: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Écrire la configuration d'exemple
    Init {
        /// Écrase un fichier existant
        #[arg(long)]
        force: bool,
    },

    /// Importer des employés depuis un CSV (`name,role[,unavailable]`)
    ImportEmployees {
        #[arg(long)]
        csv: String,
    },

    /// Déclarer des jours d'indisponibilité
    Unavailable {
        #[arg(long)]
        name: String,
        /// liste "1,15"
        #[arg(long)]
        days: String,
    },

    /// Construire le planning du mois
    Plan {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vérifier un planning exporté
    Check {
        #[arg(long)]
        plan: String,
        /// Export CSV des violations (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Remplacer une personne sur une journée d'un planning exporté
    Swap {
        #[arg(long)]
        plan: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long)]
        person: String,
        #[arg(long)]
        with: String,
    },

    /// Générer un rappel texte pour la prochaine permanence d'un employé
    Notify {
        #[arg(long)]
        plan: String,
        #[arg(long)]
        name: String,
        /// Date de référence (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        #[arg(long, default_value_t = 2)]
        days_before: i64,
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.config)?;

    let code = match cli.cmd {
        Commands::Init { force } => {
            if storage.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    storage.path().display()
                );
            }
            storage.save(&PlanningConfig::sample())?;
            println!("wrote {}", storage.path().display());
            0
        }
        Commands::ImportEmployees { csv } => {
            let mut config = storage.load()?;
            let (employees, unavailable) = io::import_employees_csv(csv)?;
            config.employees.employees.extend(employees);
            for (name, days) in unavailable.days {
                config.unavailable.block(name, days);
            }
            storage.save(&config)?;
            0
        }
        Commands::Unavailable { name, days } => {
            let mut config = storage.load()?;
            if config.employees.find(&name).is_none() {
                bail!("unknown employee: {name}");
            }
            let days = io::parse_days(&days)?;
            config.unavailable.block(name, days);
            storage.save(&config)?;
            0
        }
        Commands::Plan {
            year,
            month,
            out_json,
            out_csv,
        } => {
            let mut config = storage.load()?;
            config.year = year.unwrap_or(config.year);
            config.month = month.unwrap_or(config.month);
            config.validate()?;

            let allocation = config
                .scheduler()
                .allocate(config.year, config.month)
                .with_context(|| format!("planning {}-{:02}", config.year, config.month))?;

            if let Some(path) = out_json {
                io::export_plan_json(path, &allocation.plan)?;
            }
            if let Some(path) = out_csv {
                io::export_plan_csv(path, &allocation.plan)?;
            }
            print!("{}", io::render_plan(&allocation.plan));
            println!();
            print!("{}", io::render_counts(&config.employees, &allocation.counts));
            0
        }
        Commands::Check { plan, report } => {
            let config = storage.load()?;
            let plan = io::load_plan_json(plan)?;
            let violations = config
                .scheduler()
                .check(&plan, config.year, config.month)?;
            if violations.is_empty() {
                println!("OK: no violations");
                0
            } else {
                eprintln!("Found {} violation(s)", violations.len());
                let mut w = report.map(|p| csv::Writer::from_path(p)).transpose()?;
                if let Some(w) = w.as_mut() {
                    w.write_record(["date", "kind", "employee"])?;
                }
                for v in &violations {
                    let (kind, who) = match &v.kind {
                        ViolationKind::MissingDate => ("missing", ""),
                        ViolationKind::UnexpectedDate => ("unexpected", ""),
                        ViolationKind::SamePersonTwice => ("duplicate", ""),
                        ViolationKind::NotAManager => ("no-manager", ""),
                        ViolationKind::UnknownEmployee(n) => ("unknown", n.as_str()),
                        ViolationKind::Unavailable(n) => ("unavailable", n.as_str()),
                    };
                    eprintln!("{} {} {}", v.date, kind, who);
                    if let Some(w) = w.as_mut() {
                        let date = v.date.to_string();
                        w.write_record([date.as_str(), kind, who])?;
                    }
                }
                if let Some(mut w) = w {
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Swap {
            plan: plan_path,
            date,
            person,
            with,
        } => {
            let config = storage.load()?;
            let mut plan = io::load_plan_json(&plan_path)?;
            let date: NaiveDate = date.parse().context("date YYYY-MM-DD")?;
            config.scheduler().replace(&mut plan, date, &person, &with)?;
            io::export_plan_json(&plan_path, &plan)?;
            0
        }
        Commands::Notify {
            plan,
            name,
            from,
            days_before,
            out,
        } => {
            let config = storage.load()?;
            let plan = io::load_plan_json(plan)?;
            let today: NaiveDate = from.parse().context("from YYYY-MM-DD")?;
            let reminder = prepare_reminder(
                &config.employees,
                &plan,
                &name,
                days_before,
                today,
                &TextReminder,
            )?;
            std::fs::write(&out, reminder.content)?;
            println!(
                "Reminder generated for {} (duty {}) on {}",
                reminder.name, reminder.duty_date, reminder.notice_on
            );
            0
        }
    };

    std::process::exit(code);
}
