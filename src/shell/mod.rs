//! Interactive numbered-menu shell.

use anyhow::Result;
use rustyline::{error::ReadlineError, history::FileHistory, Config, Editor};

use crate::cli_style::{
    print_error, print_menu_item, print_movie_line, print_section_footer, print_section_header,
    print_success, print_warning,
};
use crate::config::AppConfig;
use crate::metadata::MetadataLookup;
use crate::movie_store::{DeleteOutcome, MovieStore, UpdateOutcome};
use crate::{reporting, website};

pub mod commands;

use commands::{add_movie, movie_line, AddOutcome};

const MENU: &[(usize, &str)] = &[
    (0, "Exit"),
    (1, "List movies"),
    (2, "Add movie"),
    (3, "Delete movie"),
    (4, "Update movie rating"),
    (5, "Stats"),
    (6, "Random movie"),
    (7, "Search movie"),
    (8, "Movies sorted by rating"),
    (9, "Generate website"),
];

const PROMPT: &str = "Enter choice (0-9): ";

enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

pub struct Shell<'a> {
    store: &'a dyn MovieStore,
    lookup: &'a dyn MetadataLookup,
    config: &'a AppConfig,
}

impl<'a> Shell<'a> {
    pub fn new(
        store: &'a dyn MovieStore,
        lookup: &'a dyn MetadataLookup,
        config: &'a AppConfig,
    ) -> Self {
        Shell {
            store,
            lookup,
            config,
        }
    }

    pub fn run(&self) -> Result<()> {
        let config = Config::builder().auto_add_history(true).build();
        let mut rl: Editor<(), FileHistory> = Editor::with_config(config)?;

        loop {
            print_menu();
            match rl.readline(PROMPT) {
                Ok(line) => match self.execute_choice(line.trim(), &mut rl) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => {
                        println!("Bye!");
                        break;
                    }
                    CommandExecutionResult::Error(err) => {
                        print_error(&err);
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D: exiting.");
                    break;
                }
                Err(e) => {
                    println!("Error: {:?}", e);
                    break;
                }
            }
        }
        Ok(())
    }

    fn execute_choice(
        &self,
        choice: &str,
        rl: &mut Editor<(), FileHistory>,
    ) -> CommandExecutionResult {
        if choice.is_empty() {
            return CommandExecutionResult::Ok;
        }
        let choice: usize = match choice.parse() {
            Ok(n) if n <= 9 => n,
            _ => {
                return CommandExecutionResult::Error(format!(
                    "Invalid choice '{}', enter a number between 0 and 9",
                    choice
                ));
            }
        };

        let result = match choice {
            0 => return CommandExecutionResult::Exit,
            1 => self.list_movies(),
            2 => self.add_movie(rl),
            3 => self.delete_movie(rl),
            4 => self.update_rating(rl),
            5 => self.stats(),
            6 => self.random_movie(),
            7 => self.search_movies(rl),
            8 => self.sorted_movies(),
            9 => self.generate_website(),
            _ => unreachable!(),
        };

        match result {
            Ok(()) => CommandExecutionResult::Ok,
            Err(err) => CommandExecutionResult::Error(format!("{:#}", err)),
        }
    }

    fn list_movies(&self) -> Result<()> {
        let movies = self.store.list()?;
        print_section_header(&format!("{} movies in total", movies.len()));
        for movie in movies.iter() {
            print_movie_line(&movie_line(movie));
        }
        print_section_footer();
        Ok(())
    }

    fn add_movie(&self, rl: &mut Editor<(), FileHistory>) -> Result<()> {
        let title = match prompt_title(rl)? {
            Some(title) => title,
            None => return Ok(()),
        };
        match add_movie(self.store, self.lookup, &title)? {
            AddOutcome::Added(movie) => {
                print_success(&format!("Added {}", movie_line(&movie)));
            }
            AddOutcome::AlreadyExists(stored_title) => {
                print_warning(&format!("Movie '{}' already exists", stored_title));
            }
            AddOutcome::NotFound => {
                print_warning(&format!("Movie '{}' was not found", title));
            }
        }
        Ok(())
    }

    fn delete_movie(&self, rl: &mut Editor<(), FileHistory>) -> Result<()> {
        let title = match prompt_title(rl)? {
            Some(title) => title,
            None => return Ok(()),
        };
        match self.store.delete(&title)? {
            DeleteOutcome::Deleted(count) => {
                print_success(&format!("Deleted '{}' ({} removed)", title, count));
            }
            DeleteOutcome::NotFound => {
                print_warning(&format!("Movie '{}' doesn't exist", title));
            }
        }
        Ok(())
    }

    fn update_rating(&self, rl: &mut Editor<(), FileHistory>) -> Result<()> {
        let title = match prompt_title(rl)? {
            Some(title) => title,
            None => return Ok(()),
        };
        let line = rl.readline("Enter new movie rating (0-10): ")?;
        let rating: f64 = match line.trim().parse() {
            Ok(r) if (0.0..=10.0).contains(&r) => r,
            _ => {
                print_error(&format!(
                    "Invalid rating '{}', enter a number between 0 and 10",
                    line.trim()
                ));
                return Ok(());
            }
        };
        match self.store.update_rating(&title, rating)? {
            UpdateOutcome::Updated => {
                print_success(&format!("Movie '{}' updated to {:.1}", title, rating));
            }
            UpdateOutcome::NotFound => {
                print_warning(&format!("Movie '{}' doesn't exist", title));
            }
        }
        Ok(())
    }

    fn stats(&self) -> Result<()> {
        let movies = self.store.list()?;
        let stats = match reporting::statistics(&movies) {
            Some(stats) => stats,
            None => {
                print_warning("No movies available.");
                return Ok(());
            }
        };
        print_section_header("Stats");
        print_movie_line(&format!("Average rating: {:.2}", stats.mean));
        print_movie_line(&format!("Median rating: {:.2}", stats.median));
        print_movie_line(&format!(
            "Best movie(s): {} ({:.1})",
            stats.best.join(", "),
            stats.best_rating
        ));
        print_movie_line(&format!(
            "Worst movie(s): {} ({:.1})",
            stats.worst.join(", "),
            stats.worst_rating
        ));
        print_section_footer();
        Ok(())
    }

    fn random_movie(&self) -> Result<()> {
        let movies = self.store.list()?;
        match reporting::random_pick(&movies) {
            Some(movie) => print_success(&format!("Your movie for tonight: {}", movie_line(movie))),
            None => print_warning("No movies available."),
        }
        Ok(())
    }

    fn search_movies(&self, rl: &mut Editor<(), FileHistory>) -> Result<()> {
        let needle = rl.readline("Enter part of the movie name: ")?;
        let needle = needle.trim();
        let movies = self.store.list()?;
        let matches = reporting::search(&movies, needle);
        if matches.is_empty() {
            print_warning("No matching movies found.");
            return Ok(());
        }
        print_section_header(&format!("{} matching movies", matches.len()));
        for movie in matches {
            print_movie_line(&movie_line(movie));
        }
        print_section_footer();
        Ok(())
    }

    fn sorted_movies(&self) -> Result<()> {
        let movies = self.store.list()?;
        if movies.is_empty() {
            print_warning("No movies available.");
            return Ok(());
        }
        print_section_header("Movies sorted by rating");
        for movie in reporting::sorted_by_rating(&movies) {
            print_movie_line(&movie_line(movie));
        }
        print_section_footer();
        Ok(())
    }

    fn generate_website(&self) -> Result<()> {
        website::generate(
            self.store,
            &self.config.template_path,
            &self.config.output_path,
        )?;
        print_success(&format!(
            "Website was generated successfully at {}",
            self.config.output_path.display()
        ));
        Ok(())
    }
}

fn print_menu() {
    print_section_header("Menu");
    for (number, name) in MENU {
        print_menu_item(*number, name);
    }
    print_section_footer();
}

/// Prompts for a movie title, None if the input is empty.
fn prompt_title(rl: &mut Editor<(), FileHistory>) -> Result<Option<String>> {
    let line = rl.readline("Enter movie title: ")?;
    let title = line.trim();
    if title.is_empty() {
        print_error("Movie title must not be empty");
        return Ok(None);
    }
    Ok(Some(title.to_string()))
}
