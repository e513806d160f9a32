//! Interactive menu loop.
//!
//! The loop is a two-state machine. From [`MenuState::AwaitingChoice`] the
//! menu is shown, one choice is read and dispatched, and the loop comes back
//! to the same state. Choosing exit, or running out of input at any prompt,
//! moves to [`MenuState::Terminated`].
//!
//! Failures inside an operation are printed and logged, and the menu carries
//! on. Only a broken console ends the loop with an error.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::output;
use crate::application::Catalog;
use crate::domain::{AddressDraft, Country, GeoPoint, Resolved};
use crate::error::{Error, Result};
use crate::port::inbound::console::Console;
use crate::port::outbound::store::Store;

/// Prompt shown after the option list.
pub const CHOICE_PROMPT: &str = "Enter the option number";

const MENU: [&str; 8] = [
    "Choose an option:",
    "1. List countries",
    "2. List cities",
    "3. List addresses",
    "4. Register new country",
    "5. Register new city",
    "6. Register new address",
    "7. Exit",
];

/// One entry of the option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListCountries,
    ListCities,
    ListAddresses,
    CreateCountry,
    CreateCity,
    CreateAddress,
    Exit,
}

/// Input that is not one of the option numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid option {0:?}")]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::ListCountries),
            "2" => Ok(Self::ListCities),
            "3" => Ok(Self::ListAddresses),
            "4" => Ok(Self::CreateCountry),
            "5" => Ok(Self::CreateCity),
            "6" => Ok(Self::CreateAddress),
            "7" => Ok(Self::Exit),
            other => Err(InvalidChoice(other.to_string())),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ListCountries => "list countries",
            Self::ListCities => "list cities",
            Self::ListAddresses => "list addresses",
            Self::CreateCountry => "register country",
            Self::CreateCity => "register city",
            Self::CreateAddress => "register address",
            Self::Exit => "exit",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    Terminated,
}

/// Why an operation stopped early.
enum Halt {
    /// Input ran out mid-operation.
    EndOfInput,
    /// The operation failed; the menu continues.
    Failed(Error),
    /// The console itself failed.
    Console(Error),
}

type Step<T> = std::result::Result<T, Halt>;

/// The menu loop over a catalog and a console.
pub struct Menu<S, C> {
    catalog: Catalog<S>,
    console: C,
    state: MenuState,
}

impl<S: Store, C: Console> Menu<S, C> {
    #[must_use]
    pub fn new(catalog: Catalog<S>, console: C) -> Self {
        Self {
            catalog,
            console,
            state: MenuState::AwaitingChoice,
        }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Split the menu back into its parts.
    pub fn into_parts(self) -> (Catalog<S>, C) {
        (self.catalog, self.console)
    }

    /// Loop until the user exits or input ends.
    ///
    /// # Errors
    /// Returns an error only if the console cannot be read or written.
    pub async fn run(&mut self) -> Result<()> {
        info!("menu started");
        while self.state == MenuState::AwaitingChoice {
            self.step().await?;
        }
        info!("menu finished");
        Ok(())
    }

    /// Show the menu once, read one choice and act on it.
    ///
    /// # Errors
    /// Returns an error only if the console cannot be read or written.
    pub async fn step(&mut self) -> Result<MenuState> {
        if self.state == MenuState::Terminated {
            return Ok(self.state);
        }

        for line in MENU {
            self.console.print(line)?;
        }

        let Some(input) = self.console.prompt(CHOICE_PROMPT)? else {
            debug!("input exhausted at the menu");
            self.exit()?;
            return Ok(self.state);
        };

        match input.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => self.exit()?,
            Ok(choice) => self.dispatch(choice).await?,
            Err(err) => {
                debug!(error = %err, "rejected menu input");
                self.console.print(&output::warning("Invalid option"))?;
            }
        }

        Ok(self.state)
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        debug!(%choice, "dispatching");
        let outcome = match choice {
            MenuChoice::ListCountries => self.list_countries().await,
            MenuChoice::ListCities => self.list_cities().await,
            MenuChoice::ListAddresses => self.list_addresses().await,
            MenuChoice::CreateCountry => self.create_country().await,
            MenuChoice::CreateCity => self.create_city().await,
            MenuChoice::CreateAddress => self.create_address().await,
            MenuChoice::Exit => {
                self.exit()?;
                Ok(())
            }
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(Halt::EndOfInput) => {
                debug!(%choice, "input exhausted mid-operation");
                self.exit()
            }
            Err(Halt::Failed(err)) => {
                match &err {
                    Error::Domain(_) => warn!(%choice, error = %err, "operation rejected"),
                    _ => error!(%choice, error = %err, "operation failed"),
                }
                self.console.print(&output::error(&err.to_string()))
            }
            Err(Halt::Console(err)) => Err(err),
        }
    }

    fn exit(&mut self) -> Result<()> {
        self.console.print("Exiting...")?;
        self.console.close();
        self.state = MenuState::Terminated;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Step<String> {
        match self.console.prompt(question) {
            Ok(Some(answer)) => Ok(answer),
            Ok(None) => Err(Halt::EndOfInput),
            Err(err) => Err(Halt::Console(err)),
        }
    }

    fn say(&mut self, line: &str) -> Step<()> {
        self.console.print(line).map_err(Halt::Console)
    }

    fn show_json<T: Serialize>(&mut self, title: &str, rows: &T) -> Step<()> {
        let json = serde_json::to_string_pretty(rows).map_err(|e| Halt::Failed(e.into()))?;
        self.say(&output::section(title))?;
        self.say(&json)
    }

    async fn list_countries(&mut self) -> Step<()> {
        let countries = self.catalog.list_countries().await.map_err(Halt::Failed)?;
        self.show_json("Countries:", &countries)
    }

    async fn list_cities(&mut self) -> Step<()> {
        let cities = self.catalog.list_cities().await.map_err(Halt::Failed)?;
        self.show_json("Cities with their country:", &cities)
    }

    async fn list_addresses(&mut self) -> Step<()> {
        let addresses = self.catalog.list_addresses().await.map_err(Halt::Failed)?;
        self.show_json("Addresses with their city and country:", &addresses)
    }

    async fn create_country(&mut self) -> Step<()> {
        let name = self.ask("Enter the country name")?;
        let country = self
            .catalog
            .find_or_create_country(&name)
            .await
            .map_err(Halt::Failed)?;
        self.report_country(&country)
    }

    async fn create_city(&mut self) -> Step<()> {
        let city_name = self.ask("Enter the city name")?;
        let country_name = self.ask("Enter the country name")?;

        let resolution = self
            .catalog
            .find_or_create_city(&city_name, &country_name)
            .await
            .map_err(Halt::Failed)?;

        self.report_country(&resolution.country)?;
        let city = resolution.city.get();
        let line = if resolution.city.was_created() {
            output::success(&format!("City \"{}\" created", city.name))
        } else {
            output::notice(&format!(
                "City \"{}\" already exists in \"{}\"",
                city.name,
                resolution.country.get().name
            ))
        };
        self.say(&line)
    }

    async fn create_address(&mut self) -> Step<()> {
        let line1 = self.ask("Enter the address")?;
        let line2 = self.ask("Enter the second address line (optional)")?;
        let district = self.ask("Enter the district")?;
        let phone = self.ask("Enter the phone number")?;
        let postal_code = self.ask("Enter the postal code (optional)")?;
        let city_name = self.ask("Enter the city name")?;
        let location = self.ask("Enter the location as \"x y\" (optional)")?;

        let location = parse_location(&location).map_err(Halt::Failed)?;
        let draft = AddressDraft::try_new(line1, Some(line2), district, phone, Some(postal_code))
            .map_err(|e| Halt::Failed(e.into()))?
            .with_location(location);

        let city = match self
            .catalog
            .find_city_by_name(&city_name)
            .await
            .map_err(Halt::Failed)?
        {
            Some(city) => city,
            None => {
                self.say(&output::notice(&format!(
                    "City \"{city_name}\" does not exist. Creating it..."
                )))?;
                let country_name = self.ask("Enter the country name")?;
                let country = self
                    .catalog
                    .find_or_create_country(&country_name)
                    .await
                    .map_err(Halt::Failed)?;
                self.report_country(&country)?;

                let city = self
                    .catalog
                    .create_city(&city_name, country.get().id)
                    .await
                    .map_err(Halt::Failed)?;
                self.say(&output::success(&format!("City \"{}\" created", city.name)))?;
                city
            }
        };

        let address = self
            .catalog
            .create_address(draft, city.id)
            .await
            .map_err(Halt::Failed)?;
        self.say(&output::success(&format!(
            "Address \"{}\" registered in \"{}\"",
            address.address, city.name
        )))
    }

    fn report_country(&mut self, country: &Resolved<Country>) -> Step<()> {
        let line = match country {
            Resolved::Created(c) => output::success(&format!("Country \"{}\" created", c.name)),
            Resolved::Found(c) => output::notice(&format!("Country \"{}\" already exists", c.name)),
        };
        self.say(&line)
    }
}

/// Blank input means no location.
fn parse_location(input: &str) -> Result<Option<GeoPoint>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    Ok(Some(input.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryStore;
    use crate::testkit::console::ScriptedConsole;

    fn menu(answers: &[&str]) -> Menu<MemoryStore, ScriptedConsole> {
        Menu::new(
            Catalog::new(MemoryStore::new()),
            ScriptedConsole::new(answers.iter().copied()),
        )
    }

    #[test]
    fn choices_parse_after_trimming() {
        assert_eq!(" 1 ".parse::<MenuChoice>(), Ok(MenuChoice::ListCountries));
        assert_eq!("6\t".parse::<MenuChoice>(), Ok(MenuChoice::CreateAddress));
        assert_eq!("7".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn anything_else_is_invalid() {
        for input in ["", "0", "8", "one", "1 2", "-1"] {
            assert!(input.parse::<MenuChoice>().is_err(), "{input:?} parsed");
        }
    }

    #[test]
    fn blank_location_is_none() {
        assert_eq!(parse_location("  ").unwrap(), None);
        assert_eq!(
            parse_location("1.5 -2").unwrap(),
            Some(GeoPoint::try_new(1.5, -2.0).unwrap())
        );
        assert!(parse_location("north").is_err());
    }

    #[tokio::test]
    async fn exit_terminates_without_showing_the_menu_again() {
        let mut menu = menu(&["7", "1"]);

        menu.run().await.unwrap();

        assert_eq!(menu.state(), MenuState::Terminated);
        assert_eq!(menu.console().count("Choose an option:"), 1);
        assert_eq!(menu.console().count("Exiting..."), 1);
        assert_eq!(menu.console().remaining(), 1);
        assert!(menu.console().is_closed());
    }

    #[tokio::test]
    async fn end_of_input_acts_as_exit() {
        let mut menu = menu(&[]);

        menu.run().await.unwrap();

        assert_eq!(menu.state(), MenuState::Terminated);
        assert_eq!(menu.console().count("Exiting..."), 1);
    }

    #[tokio::test]
    async fn each_operation_runs_once_then_menu_returns() {
        let mut menu = menu(&["4", "Wakanda", "7"]);

        assert_eq!(menu.step().await.unwrap(), MenuState::AwaitingChoice);
        assert_eq!(menu.catalog().store().counts(), (1, 0, 0));
        assert_eq!(menu.console().count("Country \"Wakanda\" created"), 1);

        assert_eq!(menu.step().await.unwrap(), MenuState::Terminated);
        assert_eq!(menu.console().count("Choose an option:"), 2);
    }

    #[tokio::test]
    async fn invalid_option_mutates_nothing() {
        let mut menu = menu(&["9", "abc", "7"]);

        menu.run().await.unwrap();

        assert_eq!(menu.console().count("Invalid option"), 2);
        assert_eq!(menu.console().count("Choose an option:"), 3);
        assert_eq!(menu.catalog().store().counts(), (0, 0, 0));
    }

    #[tokio::test]
    async fn empty_lists_print_empty_arrays() {
        let mut menu = menu(&["1", "2", "3", "7"]);

        menu.run().await.unwrap();

        let console = menu.console();
        assert_eq!(console.count("Countries:"), 1);
        assert_eq!(console.count("Cities with their country:"), 1);
        assert_eq!(console.count("Addresses with their city and country:"), 1);
        assert_eq!(console.lines_equal("[]"), 3);
    }

    #[tokio::test]
    async fn repeated_country_reports_existing_row() {
        let mut menu = menu(&["4", "Wakanda", "4", "Wakanda", "7"]);

        menu.run().await.unwrap();

        assert_eq!(menu.console().count("Country \"Wakanda\" created"), 1);
        assert_eq!(menu.console().count("Country \"Wakanda\" already exists"), 1);
        assert_eq!(menu.catalog().store().counts(), (1, 0, 0));
    }

    #[tokio::test]
    async fn city_creation_reports_both_levels() {
        let mut menu = menu(&["5", "Testville", "Testland", "5", "Testville", "Testland", "7"]);

        menu.run().await.unwrap();

        let console = menu.console();
        assert_eq!(console.count("Country \"Testland\" created"), 1);
        assert_eq!(console.count("City \"Testville\" created"), 1);
        assert_eq!(console.count("Country \"Testland\" already exists"), 1);
        assert_eq!(console.count("City \"Testville\" already exists"), 1);
        assert_eq!(menu.catalog().store().counts(), (1, 1, 0));
    }

    #[tokio::test]
    async fn address_in_unknown_city_creates_country_and_city() {
        let mut menu = menu(&[
            "6",
            "1 Nowhere Rd",
            "",
            "Void",
            "555-0199",
            "",
            "Nowhereton",
            "",
            "Nullland",
            "7",
        ]);

        menu.run().await.unwrap();

        let console = menu.console();
        assert_eq!(
            console.count("City \"Nowhereton\" does not exist. Creating it..."),
            1
        );
        assert_eq!(console.count("Country \"Nullland\" created"), 1);
        assert_eq!(console.count("Address \"1 Nowhere Rd\" registered"), 1);
        assert_eq!(menu.catalog().store().counts(), (1, 1, 1));
    }

    #[tokio::test]
    async fn bad_location_abandons_before_any_write() {
        let mut menu = menu(&[
            "6",
            "1 Nowhere Rd",
            "",
            "Void",
            "555-0199",
            "",
            "Nowhereton",
            "here",
            "7",
        ]);

        menu.run().await.unwrap();

        assert_eq!(menu.state(), MenuState::Terminated);
        assert_eq!(menu.console().count("invalid point"), 1);
        assert_eq!(menu.catalog().store().counts(), (0, 0, 0));
    }

    #[tokio::test]
    async fn store_failure_is_printed_and_menu_continues() {
        let mut menu = menu(&["4", "Wakanda", "1", "7"]);
        menu.catalog().store().fail_writes("disk I/O error");

        menu.run().await.unwrap();

        assert_eq!(menu.console().count("disk I/O error"), 1);
        assert_eq!(menu.console().count("Countries:"), 1);
        assert_eq!(menu.console().count("Choose an option:"), 3);
    }

    #[tokio::test]
    async fn end_of_input_mid_operation_exits() {
        let mut menu = menu(&["5", "Testville"]);

        menu.run().await.unwrap();

        assert_eq!(menu.state(), MenuState::Terminated);
        assert_eq!(menu.console().count("Exiting..."), 1);
        assert_eq!(menu.catalog().store().counts(), (0, 0, 0));
    }
}
