//! Demo session: a main menu, a validated profile editor and a reset prompt
//!
//! Screens are opened one at a time by [`Demo::run`]. Form callbacks only
//! record which screen to open next, so a navigation entry re-opens its form
//! by scheduling it rather than showing it from inside another form.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use formwright_forms::{
    ActionForm, ActionFormBackend, Dropdown, FormError, FormOutcome, MessageForm,
    MessageFormBackend, ModalForm, ModalFormBackend, NavigationContext, Slider, TextField, Toggle,
    ValidationOutcome,
};
use tracing::info;

pub const CLASSES: [&str; 3] = ["Warrior", "Mage", "Rogue"];

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub notifications: bool,
    pub class: usize,
    pub volume: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Steve".to_string(),
            age: 21,
            notifications: true,
            class: 0,
            volume: 50.0,
        }
    }
}

impl Profile {
    fn summary(&self) -> String {
        format!(
            "{} ({}), {}, notifications {}, volume {}",
            self.name,
            self.age,
            CLASSES.get(self.class).copied().unwrap_or("?"),
            if self.notifications { "on" } else { "off" },
            self.volume
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    EditProfile,
    ConfirmReset,
}

/// Host form types the demo is shown with
pub trait DemoHost {
    type Player;
    type Action: ActionFormBackend<Player = Self::Player> + Default;
    type Message: MessageFormBackend<Player = Self::Player> + Default;
    type Modal: ModalFormBackend<Player = Self::Player>;
}

fn not_empty(name: &str) -> ValidationOutcome {
    if name.trim().is_empty() {
        ValidationOutcome::error("must not be empty")
    } else {
        ValidationOutcome::Correct
    }
}

fn valid_age(age: &str) -> ValidationOutcome {
    match age.trim().parse::<u32>() {
        Ok(1..=150) => ValidationOutcome::Correct,
        Ok(_) => ValidationOutcome::error("must be between 1 and 150"),
        Err(_) => ValidationOutcome::error("must be a whole number"),
    }
}

pub struct Demo {
    navigation: NavigationContext,
    next: Rc<Cell<Option<Screen>>>,
    profile: Rc<RefCell<Profile>>,
}

impl Demo {
    pub fn new(navigation: NavigationContext) -> Self {
        Self {
            navigation,
            next: Rc::new(Cell::new(None)),
            profile: Rc::new(RefCell::new(Profile::default())),
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile.borrow().clone()
    }

    pub fn navigation(&self) -> &NavigationContext {
        &self.navigation
    }

    /// Schedule `screen` to be shown once the current form returns
    fn open(&self, screen: Screen) -> impl FnMut() + 'static {
        let next = self.next.clone();
        move || next.set(Some(screen))
    }

    fn back(&self) -> impl FnMut() + 'static {
        let navigation = self.navigation.clone();
        move || {
            navigation.navigate_back();
        }
    }

    /// Show screens until one is closed or none is scheduled
    pub async fn run<H: DemoHost>(&self, player: &H::Player) -> Result<(), FormError> {
        self.next.set(Some(Screen::MainMenu));

        while let Some(screen) = self.next.take() {
            info!(target: "forms", "Opening {:?}", screen);
            let outcome = match screen {
                Screen::MainMenu => self.main_menu::<H::Action>().show(player).await?,
                Screen::EditProfile => self.edit_profile::<H::Modal>().show(player).await?,
                Screen::ConfirmReset => self.confirm_reset::<H::Message>().show(player).await?,
            };
            if let FormOutcome::Canceled(reason) = outcome {
                info!(target: "forms", "{:?} closed ({})", screen, reason);
                break;
            }
        }
        Ok(())
    }

    fn main_menu<B: ActionFormBackend + Default>(&self) -> ActionForm<B> {
        ActionForm::new(B::default(), &self.navigation, self.open(Screen::MainMenu))
            .title("Main menu")
            .body(self.profile.borrow().summary())
            .button("Edit profile", self.open(Screen::EditProfile))
            .button("Reset profile", self.open(Screen::ConfirmReset))
            .passive_button("Quit")
    }

    fn edit_profile<B: ModalFormBackend>(&self) -> ModalForm<B> {
        let current = self.profile();
        let profile = self.profile.clone();
        let mut back = self.back();

        ModalForm::new(&self.navigation, self.open(Screen::EditProfile))
            .title("Edit profile")
            .text_field(
                TextField::new("Name", "Steve").default_value(current.name),
                not_empty,
            )
            .text_field(
                TextField::new("Age", "e.g. 21").default_value(current.age.to_string()),
                valid_age,
            )
            .control(Toggle::new("Notifications").default_value(current.notifications))
            .control(Dropdown::new("Class", CLASSES).default_index(current.class))
            .slider(
                Slider::new("Volume", 0.0, 100.0)
                    .step(5.0)
                    .default_value(current.volume),
                |volume| {
                    if volume % 5.0 == 0.0 {
                        ValidationOutcome::Correct
                    } else {
                        ValidationOutcome::error("must be a multiple of 5")
                    }
                },
            )
            .submit_button("Save", move |response| {
                let values = &response.form_values;
                let mut profile = profile.borrow_mut();
                if let Some(name) = values[0].as_text() {
                    profile.name = name.trim().to_string();
                }
                if let Some(age) = values[1].as_text().and_then(|age| age.trim().parse().ok()) {
                    profile.age = age;
                }
                if let Some(notifications) = values[2].as_bool() {
                    profile.notifications = notifications;
                }
                if let Some(class) = values[3].as_index() {
                    profile.class = class;
                }
                if let Some(volume) = values[4].as_number() {
                    profile.volume = volume;
                }
                info!(target: "forms", "Saved profile: {}", profile.summary());
                drop(profile);
                back();
            })
    }

    fn confirm_reset<B: MessageFormBackend + Default>(&self) -> MessageForm<B> {
        let profile = self.profile.clone();
        let mut back = self.back();

        MessageForm::new(B::default(), &self.navigation, self.open(Screen::ConfirmReset))
            .title("Reset profile")
            .body("Restore the default profile?")
            .button1("Reset", move || {
                *profile.borrow_mut() = Profile::default();
                info!(target: "forms", "Profile reset");
                back();
            })
            .button2("Back", self.back())
    }
}
