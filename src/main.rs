//! Word Scramble entry point
//!
//! Native builds run the terminal game; the WASM entry point lives in
//! `word_scramble::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io;
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use word_scramble::game::{GameSession, RandomSource, SeededRandom};
    use word_scramble::persistence::{FileStore, KeyValueStore, MemoryStore};
    use word_scramble::{Dictionary, Settings, WordList, terminal};

    /// Make words from the letters of a random root word
    #[derive(Parser, Debug)]
    #[command(name = "word-scramble", version, about)]
    pub struct Args {
        /// Root word list, one word per line (default: bundled words)
        #[arg(long)]
        words: Option<PathBuf>,

        /// Dictionary file, one word per line
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Where the current game is saved
        #[arg(long)]
        save_file: Option<PathBuf>,

        /// Settings JSON file (default: word-scramble.json if present)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Seed for reproducible root word selection
        #[arg(long)]
        seed: Option<u64>,

        /// Don't read or write a save file
        #[arg(long)]
        ephemeral: bool,

        /// Write the effective settings back to the settings file
        #[arg(long)]
        save_settings: bool,
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();

        let mut settings = match &args.settings {
            Some(path) => Settings::try_load_from(path)
                .with_context(|| format!("reading settings from {}", path.display()))?,
            None => Settings::load_from(Settings::DEFAULT_PATH),
        };
        if let Some(path) = args.words {
            settings.word_list_path = Some(path);
        }
        if let Some(path) = args.dictionary {
            settings.dictionary_path = path;
        }
        if let Some(path) = args.save_file {
            settings.save_path = path;
        }

        if args.save_settings {
            let path = args
                .settings
                .clone()
                .unwrap_or_else(|| PathBuf::from(Settings::DEFAULT_PATH));
            settings
                .save_to(&path)
                .with_context(|| format!("writing settings to {}", path.display()))?;
        }

        let words = match &settings.word_list_path {
            Some(path) => WordList::load(path),
            None => WordList::bundled(),
        };
        let dictionary = Dictionary::load_or_bundled(&settings.dictionary_path, &settings.locale);

        let store: Box<dyn KeyValueStore> = if args.ephemeral {
            Box::new(MemoryStore::new())
        } else {
            Box::new(
                FileStore::open(&settings.save_path)
                    .with_context(|| format!("opening {}", settings.save_path.display()))?,
            )
        };

        let rng: Box<dyn RandomSource> = match args.seed {
            Some(seed) => Box::new(SeededRandom::from_seed(seed)),
            None => Box::new(SeededRandom::from_entropy()),
        };

        let mut game =
            GameSession::new(words, store, Box::new(dictionary), rng).with_settings(&settings);
        game.launch();

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        terminal::run(&mut game, stdin.lock(), &mut stdout)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Word Scramble (native) starting...");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is word_scramble::web::wasm_main, this is just to satisfy the compiler
}
