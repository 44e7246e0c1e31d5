//! Back navigation across chains of forms

mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::{MockActionForm, MockPlayer, Reply};
use formwright_forms::{ActionForm, FormOutcome, NavigationContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Main,
    Settings,
}

/// Builds screens on demand, the way a script re-opens menus
struct Menus {
    nav: NavigationContext,
    next: Rc<Cell<Option<Screen>>>,
    opened: Rc<RefCell<Vec<Screen>>>,
}

impl Menus {
    fn new() -> Self {
        Self {
            nav: NavigationContext::new(),
            next: Rc::new(Cell::new(None)),
            opened: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn reopen(&self, screen: Screen) -> impl FnMut() + 'static {
        let next = self.next.clone();
        move || next.set(Some(screen))
    }

    fn build(&self, screen: Screen) -> ActionForm<MockActionForm> {
        self.opened.borrow_mut().push(screen);
        let form = ActionForm::new(MockActionForm::default(), &self.nav, self.reopen(screen));
        match screen {
            Screen::Main => form
                .title("Main")
                .button("Settings", self.reopen(Screen::Settings)),
            Screen::Settings => {
                let nav = self.nav.clone();
                form.title("Settings").button("Back", move || {
                    nav.navigate_back();
                })
            }
        }
    }

    async fn run(&self, player: &MockPlayer, start: Screen) {
        self.next.set(Some(start));
        while let Some(screen) = self.next.take() {
            let mut form = self.build(screen);
            let outcome = form.show(player).await.expect("show should succeed");
            if let FormOutcome::Canceled(_) = outcome {
                break;
            }
        }
    }
}

#[tokio::test]
async fn test_back_button_returns_to_previous_form() {
    let menus = Menus::new();
    // Main -> Settings -> Back (to Main) -> close
    let player = MockPlayer::new([Reply::Select(0), Reply::Select(0)]);

    menus.run(&player, Screen::Main).await;

    assert_eq!(
        menus.opened.borrow().as_slice(),
        &[Screen::Main, Screen::Settings, Screen::Main]
    );
    let titles: Vec<_> = player
        .shown()
        .iter()
        .map(|form| form.title.clone().unwrap_or_default())
        .collect();
    assert_eq!(titles, vec!["Main", "Settings", "Main"]);
}

#[tokio::test]
async fn test_back_from_root_does_nothing() {
    let menus = Menus::new();
    // Settings is the root here, so Back has nowhere to go
    let player = MockPlayer::new([Reply::Select(0)]);

    menus.run(&player, Screen::Settings).await;

    assert_eq!(menus.opened.borrow().as_slice(), &[Screen::Settings]);
    assert!(menus.nav.is_empty());
}

#[tokio::test]
async fn test_stack_grows_with_each_opened_form() {
    let menus = Menus::new();
    let main = menus.build(Screen::Main);
    let settings = menus.build(Screen::Settings);

    assert_eq!(menus.nav.ids(), vec![main.entry_id(), settings.entry_id()]);

    assert!(menus.nav.navigate_back());
    assert_eq!(menus.next.get(), Some(Screen::Main));
    assert!(menus.nav.is_empty());
}
