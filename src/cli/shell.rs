//! Interactive menu shell
//!
//! Thin glue over `RecordStore`: prompt, parse, dispatch, print. Store
//! failures are shown to the user and the menu continues; only console
//! I/O failures end the session. End of input ends it cleanly.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::record::{MAX_AGE, MAX_SALARY, MIN_AGE, MIN_SALARY};
use crate::store::{LoadReport, RecordStore, SortDirection, SortKey, SortOutcome, SortSpec};

use super::config::Config;
use super::errors::CliResult;
use super::io::Prompter;
use super::render::{render_list, render_table};

/// Records added by the "sample data" menu entry
pub const SAMPLE_RECORDS: [(&str, u32, f64); 5] = [
    ("Иван", 25, 50000.0),
    ("Анна", 30, 75000.0),
    ("Михаил", 35, 60000.0),
    ("Ольга", 28, 55000.0),
    ("Сергей", 40, 80000.0),
];

/// Upper bound for the age asked in the search menu
const SEARCH_AGE_MAX: i64 = 1000;

const MAIN_MENU: &str = "\
RECORD DATABASE

MAIN MENU
1. Add record
2. Show all records
3. Edit record
4. Delete record
5. Search records
6. Sort records
7. Save to file
8. Load from file
9. Add sample data
0. Exit";

const SEARCH_MENU: &str = "\
SEARCH RECORDS
1. Search by name
2. Search by age
3. Search by salary
0. Back to main menu";

const SORT_MENU: &str = "\
SORT RECORDS
1. By name (A-Z)
2. By name (Z-A)
3. By age (ascending)
4. By age (descending)
5. By salary (ascending)
6. By salary (descending)
7. By ID (ascending)
8. By ID (descending)
0. Back to main menu";

/// Menu-driven session over a store.
pub struct Shell<R, W> {
    store: RecordStore,
    config: Config,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: RecordStore, config: Config, input: R, output: W) -> Self {
        Self {
            store,
            config,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns the store and the output sink
    pub fn into_parts(self) -> (RecordStore, W) {
        (self.store, self.prompter.into_output())
    }

    /// Runs the main menu until the user exits or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        log::info!(target: "SHELL_STARTED", "{} records in store", self.store.len());

        loop {
            self.prompter.say(MAIN_MENU)?;
            let Some(choice) = self.prompter.ask_int("Choose an option: ", 0, 9)? else {
                break;
            };

            let keep_going = match choice {
                1 => self.add_record()?,
                2 => self.show_all()?,
                3 => self.edit_record()?,
                4 => self.delete_record()?,
                5 => self.search_menu()?,
                6 => self.sort_menu()?,
                7 => self.save()?,
                8 => self.load()?,
                9 => self.add_samples()?,
                _ => {
                    self.prompter.say("Goodbye!")?;
                    false
                }
            };
            if !keep_going {
                break;
            }
        }

        log::info!(target: "SHELL_STOPPED", "{} records in store", self.store.len());
        Ok(())
    }

    // Each action returns false once input has run out.

    fn add_record(&mut self) -> CliResult<bool> {
        self.prompter.say("ADD RECORD")?;
        let Some((name, age, salary)) = self.ask_fields("Name: ", "Age: ", "Salary: ")? else {
            return Ok(false);
        };

        match self.store.add(&name, age, salary) {
            Ok(id) => self.prompter.say(format!("Record added (ID: {})", id))?,
            Err(e) => self.prompter.say(format!("Error: {}", e))?,
        }
        Ok(true)
    }

    fn show_all(&mut self) -> CliResult<bool> {
        let table = render_table(&self.store.sorted_by_id());
        self.prompter.say(table.trim_end())?;
        Ok(true)
    }

    fn edit_record(&mut self) -> CliResult<bool> {
        self.prompter.say("EDIT RECORD")?;
        if self.store.is_empty() {
            self.prompter.say("No records to edit.")?;
            return Ok(true);
        }
        self.show_all()?;

        let Some(id) = self.ask_id("ID of the record to edit: ")? else {
            return Ok(false);
        };
        if !self.store.exists(id) {
            self.prompter
                .say(format!("Error: record with ID {} does not exist.", id))?;
            return Ok(true);
        }

        let Some((name, age, salary)) =
            self.ask_fields("New name: ", "New age: ", "New salary: ")?
        else {
            return Ok(false);
        };

        match self.store.edit(id, &name, age, salary) {
            Ok(()) => self.prompter.say(format!("Record {} updated.", id))?,
            Err(e) => self.prompter.say(format!("Error: {}", e))?,
        }
        Ok(true)
    }

    fn delete_record(&mut self) -> CliResult<bool> {
        self.prompter.say("DELETE RECORD")?;
        if self.store.is_empty() {
            self.prompter.say("No records to delete.")?;
            return Ok(true);
        }
        self.show_all()?;

        let Some(id) = self.ask_id("ID of the record to delete: ")? else {
            return Ok(false);
        };

        match self.store.delete(id) {
            Ok(_) => self.prompter.say(format!("Record {} deleted.", id))?,
            Err(_) => self.prompter.say(format!("Record {} not found.", id))?,
        }
        Ok(true)
    }

    fn search_menu(&mut self) -> CliResult<bool> {
        loop {
            self.prompter.say(SEARCH_MENU)?;
            let Some(choice) = self.prompter.ask_int("Choose an option: ", 0, 3)? else {
                return Ok(false);
            };

            let (results, label) = match choice {
                1 => {
                    let Some(name) = self.prompter.ask("Name to search for: ")? else {
                        return Ok(false);
                    };
                    (self.store.search_by_name(&name), format!("name '{}'", name))
                }
                2 => {
                    let Some(age) = self.prompter.ask_int("Age to search for: ", 0, SEARCH_AGE_MAX)?
                    else {
                        return Ok(false);
                    };
                    // Bounded by SEARCH_AGE_MAX
                    let age = age as u32;
                    (self.store.search_by_age(age), format!("age {}", age))
                }
                3 => {
                    let Some(salary) =
                        self.prompter
                            .ask_float("Salary to search for: ", MIN_SALARY, MAX_SALARY)?
                    else {
                        return Ok(false);
                    };
                    (self.store.search_by_salary(salary), format!("salary {:.2}", salary))
                }
                _ => return Ok(true),
            };

            if results.is_empty() {
                self.prompter.say(format!("No records with {} found.", label))?;
            } else {
                self.prompter.say(format!("Found {} record(s):", results.len()))?;
                self.prompter.say(render_list(&results).trim_end())?;
            }
        }
    }

    fn sort_menu(&mut self) -> CliResult<bool> {
        loop {
            self.prompter.say(SORT_MENU)?;
            let Some(choice) = self.prompter.ask_int("Choose an option: ", 0, 8)? else {
                return Ok(false);
            };

            let spec = match choice {
                1 => SortSpec::asc(SortKey::Name),
                2 => SortSpec::desc(SortKey::Name),
                3 => SortSpec::asc(SortKey::Age),
                4 => SortSpec::desc(SortKey::Age),
                5 => SortSpec::asc(SortKey::Salary),
                6 => SortSpec::desc(SortKey::Salary),
                7 => SortSpec::asc(SortKey::Id),
                8 => SortSpec::desc(SortKey::Id),
                _ => return Ok(true),
            };

            match self.store.sort(spec) {
                SortOutcome::Empty => self.prompter.say("Database is empty. Nothing to sort.")?,
                SortOutcome::Sorted { .. } => {
                    let direction = match spec.direction {
                        SortDirection::Asc => "ascending",
                        SortDirection::Desc => "descending",
                    };
                    self.prompter
                        .say(format!("Records sorted by {} ({}).", spec.key, direction))?;
                    self.prompter.say("Current order:")?;
                    self.prompter.say(render_list(self.store.records()).trim_end())?;
                }
            }
        }
    }

    fn save(&mut self) -> CliResult<bool> {
        let default = self.config.save_file.clone();
        let Some(path) = self.ask_path("Save to", &default)? else {
            return Ok(false);
        };

        match self.store.save(&path) {
            Ok(count) => self
                .prompter
                .say(format!("Saved {} records to {}", count, path.display()))?,
            Err(e) => self.prompter.say(format!("Error: {}", e))?,
        }
        Ok(true)
    }

    fn load(&mut self) -> CliResult<bool> {
        let default = self.config.load_file.clone();
        let Some(path) = self.ask_path("Load from", &default)? else {
            return Ok(false);
        };

        match self.store.load(&path) {
            Ok(report) => self.report_load(&report, &path)?,
            Err(e) => self.prompter.say(format!("Error: {}", e))?,
        }
        Ok(true)
    }

    fn report_load(&mut self, report: &LoadReport, path: &Path) -> CliResult<()> {
        self.prompter.say(format!(
            "Loaded {} records from {}",
            report.accepted,
            path.display()
        ))?;
        for skipped in &report.skipped {
            self.prompter.say(format!(
                "Warning: entry {} skipped: {}",
                skipped.entry, skipped.reason
            ))?;
        }
        if report.skipped_count() > 0 {
            self.prompter
                .say(format!("Skipped {} invalid records.", report.skipped_count()))?;
        }
        if let Some(stop) = &report.stopped {
            self.prompter.say(format!(
                "Stopped reading at entry {}: {}",
                stop.entry, stop.reason
            ))?;
        }
        Ok(())
    }

    fn add_samples(&mut self) -> CliResult<bool> {
        for (name, age, salary) in SAMPLE_RECORDS {
            match self.store.add(name, age, salary) {
                Ok(id) => self.prompter.say(format!("Record added (ID: {})", id))?,
                Err(e) => self.prompter.say(format!("Error: {}", e))?,
            }
        }
        self.prompter.say("Sample data added.")?;
        Ok(true)
    }

    fn ask_fields(
        &mut self,
        name_prompt: &str,
        age_prompt: &str,
        salary_prompt: &str,
    ) -> CliResult<Option<(String, u32, f64)>> {
        let Some(name) = self.prompter.ask_name(name_prompt)? else {
            return Ok(None);
        };
        let Some(age) = self
            .prompter
            .ask_int(age_prompt, i64::from(MIN_AGE), i64::from(MAX_AGE))?
        else {
            return Ok(None);
        };
        let Some(salary) = self.prompter.ask_float(salary_prompt, MIN_SALARY, MAX_SALARY)? else {
            return Ok(None);
        };
        // Bounded by MAX_AGE
        Ok(Some((name, age as u32, salary)))
    }

    fn ask_id(&mut self, prompt: &str) -> CliResult<Option<u32>> {
        let id = self.prompter.ask_int(prompt, 1, i64::from(u32::MAX))?;
        Ok(id.map(|id| id as u32))
    }

    fn ask_path(&mut self, verb: &str, default: &Path) -> CliResult<Option<PathBuf>> {
        let prompt = format!("{} file [{}]: ", verb, default.display());
        let Some(answer) = self.prompter.ask(&prompt)? else {
            return Ok(None);
        };
        let answer = answer.trim();
        if answer.is_empty() {
            Ok(Some(default.to_path_buf()))
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }
}
