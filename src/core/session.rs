//! Interactive session: collect filters, report, page rows, maybe restart.
//!
//! The loop is an explicit state machine. Each call to [`Session::step`]
//! consumes the current state, talks to the user through a [`Prompter`]
//! and returns the next state, until [`SessionState::Finished`].

use crate::config::Config;
use crate::core::loader;
use crate::core::logic::Core;
use crate::core::pager::{PAGE_SIZE, RowPager};
use crate::data::TripSource;
use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::dataset::Dataset;
use crate::models::filter::{DayFilter, FilterSpec, MonthFilter};
use crate::ui::messages::{error_line, info_line, warning_line};
use crate::ui::render::{render_full_report, render_rows};
use crate::utils::formatting::rule;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub const INVALID_INPUT: &str = "Input not valid! Please retry your input!";

/// Source of user answers. `Ok(None)` means input is exhausted (EOF).
pub trait Prompter {
    fn ask(&mut self, question: &str) -> AppResult<Option<String>>;
}

/// Reads answers line by line from stdin, printing the question first.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        println!("{}", question);
        io::stdout().flush().ok();

        let mut answer = String::new();
        let read = io::stdin().lock().read_line(&mut answer)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }
}

/// Replays canned answers; records the questions asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front())
    }
}

#[derive(Debug)]
pub enum SessionState {
    CollectingFilters,
    Loaded(FilterSpec, Dataset),
    Reporting(FilterSpec, Dataset),
    PagingRows(Dataset, RowPager),
    AskRestart,
    Finished,
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::CollectingFilters => "collecting_filters",
            SessionState::Loaded(..) => "loaded",
            SessionState::Reporting(..) => "reporting",
            SessionState::PagingRows(..) => "paging_rows",
            SessionState::AskRestart => "ask_restart",
            SessionState::Finished => "finished",
        }
    }
}

pub struct Session<'a, P: Prompter, W: Write> {
    source: &'a dyn TripSource,
    cfg: &'a Config,
    prompter: P,
    out: W,
}

impl<'a, P: Prompter, W: Write> Session<'a, P, W> {
    pub fn new(source: &'a dyn TripSource, cfg: &'a Config, prompter: P, out: W) -> Self {
        Self {
            source,
            cfg,
            prompter,
            out,
        }
    }

    pub fn into_parts(self) -> (P, W) {
        (self.prompter, self.out)
    }

    pub fn run(&mut self) -> AppResult<()> {
        let mut state = SessionState::CollectingFilters;
        loop {
            state = self.step(state)?;
            if matches!(state, SessionState::Finished) {
                return Ok(());
            }
        }
    }

    pub fn step(&mut self, state: SessionState) -> AppResult<SessionState> {
        debug!(state = state.name(), "Session step");

        match state {
            SessionState::CollectingFilters => {
                let Some(filter) = self.collect_filters()? else {
                    return Ok(SessionState::Finished);
                };
                match loader::load(self.source, &filter) {
                    Ok(dataset) => Ok(SessionState::Loaded(filter, dataset)),
                    Err(AppError::Data(e)) => {
                        warn!(error = %e, "Load failed");
                        writeln!(self.out, "{}", error_line(&e))?;
                        Ok(SessionState::AskRestart)
                    }
                    Err(e) => Err(e),
                }
            }

            SessionState::Loaded(filter, dataset) => {
                if dataset.is_empty() {
                    writeln!(
                        self.out,
                        "{}",
                        warning_line(format!("No trips match this filter combination ({filter})."))
                    )?;
                    return Ok(SessionState::AskRestart);
                }
                writeln!(
                    self.out,
                    "{}",
                    info_line(format!("{} trips selected ({filter})", dataset.len()))
                )?;
                Ok(SessionState::Reporting(filter, dataset))
            }

            SessionState::Reporting(filter, dataset) => {
                let report = match Core::build_full_report(&filter, &dataset) {
                    Ok(report) => report,
                    Err(AppError::Data(e)) => {
                        warn!(error = %e, "Report failed");
                        writeln!(self.out, "{}", error_line(&e))?;
                        return Ok(SessionState::AskRestart);
                    }
                    Err(e) => return Err(e),
                };
                write!(
                    self.out,
                    "{}",
                    render_full_report(&report, filter.city.title(), self.cfg)
                )?;
                Ok(SessionState::PagingRows(dataset, RowPager::new()))
            }

            SessionState::PagingRows(dataset, mut pager) => {
                let question =
                    format!("\nWould you like to view {PAGE_SIZE} rows of data? Enter yes or no.");
                if !self.confirm(&question)? {
                    return Ok(SessionState::AskRestart);
                }
                let first = pager.offset();
                match pager.next_page(&dataset.records) {
                    Some(rows) => {
                        write!(self.out, "{}", render_rows(rows, first))?;
                        Ok(SessionState::PagingRows(dataset, pager))
                    }
                    None => {
                        writeln!(self.out, "{}", info_line("No more rows to display."))?;
                        Ok(SessionState::AskRestart)
                    }
                }
            }

            SessionState::AskRestart => {
                if self.confirm("\nWould you like to restart? Enter yes or no.")? {
                    Ok(SessionState::CollectingFilters)
                } else {
                    Ok(SessionState::Finished)
                }
            }

            SessionState::Finished => Ok(SessionState::Finished),
        }
    }

    /// City, month and day, each re-asked until valid. `None` on EOF.
    fn collect_filters(&mut self) -> AppResult<Option<FilterSpec>> {
        writeln!(self.out, "Hello! Let's explore some US bikeshare data!")?;

        let Some(city) = self.ask_valid(
            &format!("Please specify the city ({})", City::choices()),
            City::from_input,
        )?
        else {
            return Ok(None);
        };
        let Some(month) = self.ask_valid(
            "Please specify the name of the month (january, february, ..., june), or 'all' to apply no filter",
            MonthFilter::from_input,
        )?
        else {
            return Ok(None);
        };
        let Some(day) = self.ask_valid(
            "Please specify the name of the day (monday, tuesday, ..., sunday), or 'all' to apply no filter",
            DayFilter::from_input,
        )?
        else {
            return Ok(None);
        };

        writeln!(self.out, "{}", rule(&self.cfg.separator_char))?;
        Ok(Some(FilterSpec::new(city, month, day)))
    }

    fn ask_valid<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<Option<T>> {
        loop {
            let Some(answer) = self.prompter.ask(question)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.out, "{}", INVALID_INPUT)?,
            }
        }
    }

    /// Only "yes" (any case) confirms; EOF counts as no.
    fn confirm(&mut self, question: &str) -> AppResult<bool> {
        Ok(self
            .prompter
            .ask(question)?
            .is_some_and(|a| a.trim().eq_ignore_ascii_case("yes")))
    }
}
