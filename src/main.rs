use clap::Parser;
use samawarun::application::manage_config::CONFIG_KEYS;
use samawarun::application::{
    init::init, open_site_store, ConfigService, EventService, GalleryService,
};
use samawarun::cli::{
    format_event_detail, format_event_list, format_gallery_list, Cli, Commands, EventsCommand,
    GalleryCommand,
};
use samawarun::domain::PhotoDraft;
use samawarun::error::SamawarunError;
use samawarun::infrastructure::{FileSystemRepository, SiteRepository};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), SamawarunError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let store = init(&path)?;
            println!("Initialized samawarun site at {}", path.display());
            println!(
                "Content: {} events, {} gallery photos",
                store.events().len(),
                store.gallery().len()
            );
            Ok(())
        }
        Some(Commands::Events { action }) => {
            let repo = FileSystemRepository::discover()?;
            let mut service = EventService::new(open_site_store(&repo)?);

            match action {
                EventsCommand::List => print!("{}", format_event_list(service.list())),
                EventsCommand::Show { id } => {
                    let fallback = repo.load_config()?.fallback_image;
                    print!("{}", format_event_detail(service.show(&id)?, &fallback));
                }
                EventsCommand::Add { fields } => {
                    let event = service.add(fields.into_draft())?;
                    println!("Added event {} ({})", event.id, event.title);
                }
                EventsCommand::Edit { id, fields } => {
                    let event = service.edit(&id, |draft| fields.apply(draft))?;
                    println!("Updated event {} ({})", event.id, event.title);
                }
                EventsCommand::Remove { id } => {
                    let event = service.remove(&id)?;
                    println!("Removed event {} ({})", event.id, event.title);
                }
            }
            Ok(())
        }
        Some(Commands::Gallery { action }) => {
            let repo = FileSystemRepository::discover()?;
            let mut service = GalleryService::new(open_site_store(&repo)?);

            match action {
                GalleryCommand::List => print!("{}", format_gallery_list(service.list())),
                GalleryCommand::Add { url, caption } => {
                    let photo = service.add(PhotoDraft::new(url, caption))?;
                    println!("Added photo {} ({})", photo.id, photo.caption);
                }
                GalleryCommand::Remove { id } => {
                    let photo = service.remove(&id)?;
                    println!("Removed photo {} ({})", photo.id, photo.caption);
                }
            }
            Ok(())
        }
        Some(Commands::Reset) => {
            let repo = FileSystemRepository::discover()?;
            let mut store = open_site_store(&repo)?;
            store.reset()?;
            println!(
                "Restored default content: {} events, {} gallery photos",
                store.events().len(),
                store.gallery().len()
            );
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("events_slot = {}", config.events_slot);
                println!("gallery_slot = {}", config.gallery_slot);
                println!("fallback_image = {}", config.fallback_image);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: samawarun config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS);
                Ok(())
            }
        }
        None => {
            println!("samawarun - Content manager for the Samawa Run community site");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
