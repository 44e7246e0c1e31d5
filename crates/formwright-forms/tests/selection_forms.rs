//! Action and message form callback dispatch

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{MockActionForm, MockMessageForm, MockPlayer, Reply};
use formwright_forms::{
    ActionForm, CancelPolicy, CancelationReason, FormError, FormOutcome, FormsConfig, MessageForm,
    NavigationContext,
};

type Presses = Rc<RefCell<Vec<usize>>>;

fn recorder(presses: &Presses, index: usize) -> impl FnMut() + 'static {
    let presses = presses.clone();
    move || presses.borrow_mut().push(index)
}

#[tokio::test]
async fn test_second_button_runs_only_its_callback() {
    let nav = NavigationContext::new();
    let presses = Presses::default();

    let mut form = ActionForm::new(MockActionForm::default(), &nav, || {})
        .title("Menu")
        .body("Pick one")
        .button("First", recorder(&presses, 0))
        .button("Second", recorder(&presses, 1));

    let player = MockPlayer::new([Reply::Select(1)]);
    let outcome = form.show(&player).await.expect("show should succeed");

    assert_eq!(outcome, FormOutcome::Selected(1));
    assert_eq!(presses.borrow().as_slice(), &[1]);

    let shown = player.shown();
    assert_eq!(shown[0].title.as_deref(), Some("Menu"));
    assert_eq!(shown[0].body.as_deref(), Some("Pick one"));
    assert_eq!(shown[0].buttons, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_each_selection_index_runs_matching_callback() {
    for selected in 0..4 {
        let nav = NavigationContext::new();
        let presses = Presses::default();

        let mut form = ActionForm::new(MockActionForm::default(), &nav, || {});
        for index in 0..4 {
            form = form.button(format!("Option {}", index), recorder(&presses, index));
        }
        assert_eq!(form.button_count(), 4);

        let player = MockPlayer::new([Reply::Select(selected)]);
        form.show(&player).await.expect("show should succeed");

        assert_eq!(presses.borrow().as_slice(), &[selected]);
    }
}

#[tokio::test]
async fn test_passive_and_icon_buttons_keep_positions() {
    let nav = NavigationContext::new();
    let presses = Presses::default();

    let mut form = ActionForm::new(MockActionForm::default(), &nav, || {})
        .passive_button("Close")
        .icon_button("Home", "textures/ui/home", recorder(&presses, 1));

    let player = MockPlayer::new([Reply::Select(0), Reply::Select(1)]);
    form.show(&player).await.expect("show should succeed");
    assert!(presses.borrow().is_empty());

    form.show(&player).await.expect("show should succeed");
    assert_eq!(presses.borrow().as_slice(), &[1]);
}

#[tokio::test]
async fn test_cancel_runs_no_callback() {
    let nav = NavigationContext::new();
    let presses = Presses::default();

    let mut form = ActionForm::new(MockActionForm::default(), &nav, || {})
        .button("First", recorder(&presses, 0))
        .button("Second", recorder(&presses, 1));

    let player = MockPlayer::new([Reply::Cancel(CancelationReason::UserClosed)]);
    let outcome = form.show(&player).await.expect("show should succeed");

    assert_eq!(outcome, FormOutcome::Canceled(CancelationReason::UserClosed));
    assert!(presses.borrow().is_empty());
    assert!(nav.is_empty());
}

#[tokio::test]
async fn test_cancel_with_clear_all_policy_empties_stack() {
    let nav = NavigationContext::with_config(FormsConfig {
        on_cancel: CancelPolicy::ClearAll,
        ..FormsConfig::default()
    });
    nav.push(|| {});
    nav.push(|| {});

    let mut form = ActionForm::new(MockActionForm::default(), &nav, || {}).passive_button("Ok");
    assert_eq!(nav.len(), 3);

    let player = MockPlayer::new([Reply::Cancel(CancelationReason::UserBusy)]);
    form.show(&player).await.expect("show should succeed");
    assert!(nav.is_empty());
}

#[tokio::test]
async fn test_out_of_range_selection_is_reported() {
    let nav = NavigationContext::new();
    let presses = Presses::default();

    let mut form = ActionForm::new(MockActionForm::default(), &nav, || {})
        .button("Only", recorder(&presses, 0));

    let player = MockPlayer::new([Reply::Select(3)]);
    let err = form.show(&player).await.unwrap_err();

    assert!(matches!(
        err,
        FormError::SelectionOutOfRange {
            index: 3,
            options: 1
        }
    ));
    assert!(presses.borrow().is_empty());
    assert!(!nav.contains(form.entry_id()));
}

#[tokio::test]
async fn test_host_failure_removes_own_entry() {
    let nav = NavigationContext::new();
    let menu = nav.push(|| {});

    let mut action = ActionForm::new(MockActionForm::default(), &nav, || {}).passive_button("Ok");
    let player = MockPlayer::new([Reply::Fail("player left".to_string())]);
    let err = action.show(&player).await.unwrap_err();
    assert!(matches!(err, FormError::Host(_)));
    assert!(!nav.contains(action.entry_id()));

    let mut message = MessageForm::new(MockMessageForm::default(), &nav, || {});
    let player = MockPlayer::new([Reply::Fail("player left".to_string())]);
    assert!(message.show(&player).await.is_err());
    assert!(!nav.contains(message.entry_id()));

    assert_eq!(nav.ids(), vec![menu]);
}

#[tokio::test]
async fn test_message_form_maps_buttons_by_slot() {
    let nav = NavigationContext::new();
    let presses = Presses::default();

    let mut form = MessageForm::new(MockMessageForm::default(), &nav, || {})
        .title("Reset")
        .body("Reset your profile?")
        .button2("No", recorder(&presses, 2))
        .button1("Yes", recorder(&presses, 1));

    let player = MockPlayer::new([Reply::Select(1), Reply::Select(0)]);

    assert_eq!(
        form.show(&player).await.expect("show should succeed"),
        FormOutcome::Selected(1)
    );
    assert_eq!(
        form.show(&player).await.expect("show should succeed"),
        FormOutcome::Selected(0)
    );
    assert_eq!(presses.borrow().as_slice(), &[2, 1]);
    assert_eq!(player.shown()[0].buttons, vec!["2:No", "1:Yes"]);
}

#[tokio::test]
async fn test_message_form_unconfigured_button_is_noop() {
    let nav = NavigationContext::new();
    let presses = Presses::default();

    let mut form = MessageForm::new(MockMessageForm::default(), &nav, || {})
        .button1("Ok", recorder(&presses, 1));

    let player = MockPlayer::new([Reply::Select(1)]);
    let outcome = form.show(&player).await.expect("show should succeed");

    assert_eq!(outcome, FormOutcome::Selected(1));
    assert!(presses.borrow().is_empty());
}
