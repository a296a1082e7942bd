use std::time::Duration;

use fyrre::models::{Category, MenuItem};
use fyrre::widgets::{
    Carousel, NavEntry, NavState, NavigationHandle, NavigationMachine, PointerEvent,
    CAROUSEL_PERIOD, CLOSE_DELAY,
};
use tokio::time::sleep;

fn category(id: &str, name: &str, children: Vec<Category>) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        slug: name.to_lowercase(),
        children,
    }
}

fn mount_menu() -> NavigationHandle {
    let categories = vec![
        category("a", "Art", vec![category("a1", "Sculpture", vec![])]),
        category("b", "Life", vec![]),
    ];
    let entries = categories.iter().map(NavEntry::from).collect();
    NavigationMachine::new(entries).mount()
}

fn open(id: &str) -> NavState {
    NavState::Open(id.to_string())
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

mod navigation {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn moving_between_entries_never_passes_through_closed() {
        let mut menu = mount_menu();

        menu.dispatch(PointerEvent::EnterEntry("a".into())).await;
        menu.dispatch(PointerEvent::LeaveEntry("a".into())).await;
        menu.dispatch(PointerEvent::EnterEntry("b".into())).await;
        sleep(CLOSE_DELAY * 3).await;

        assert_eq!(menu.take_transitions(), vec![open("a"), open("b")]);
        assert_eq!(menu.state(), open("b"));
    }

    #[tokio::test(start_paused = true)]
    async fn reentering_before_the_delay_never_closes() {
        let mut menu = mount_menu();

        menu.dispatch(PointerEvent::EnterEntry("a".into())).await;
        menu.dispatch(PointerEvent::LeaveEntry("a".into())).await;
        sleep(ms(1500)).await;
        menu.dispatch(PointerEvent::EnterEntry("a".into())).await;
        sleep(ms(5000)).await;

        assert_eq!(menu.take_transitions(), vec![open("a")]);
    }

    #[tokio::test(start_paused = true)]
    async fn closes_exactly_once_after_the_delay() {
        let mut menu = mount_menu();

        menu.dispatch(PointerEvent::EnterEntry("a".into())).await;
        menu.dispatch(PointerEvent::LeaveEntry("a".into())).await;

        sleep(CLOSE_DELAY - ms(1)).await;
        assert_eq!(menu.state(), open("a"));

        sleep(ms(2)).await;
        assert_eq!(menu.state(), NavState::Closed);

        sleep(ms(10_000)).await;
        assert_eq!(menu.take_transitions(), vec![open("a"), NavState::Closed]);
    }

    #[tokio::test(start_paused = true)]
    async fn entering_the_submenu_holds_it_open() {
        let mut menu = mount_menu();

        menu.dispatch(PointerEvent::EnterEntry("a".into())).await;
        menu.dispatch(PointerEvent::LeaveEntry("a".into())).await;
        sleep(ms(1000)).await;
        menu.dispatch(PointerEvent::EnterSubmenu("a".into())).await;
        sleep(ms(3000)).await;
        assert_eq!(menu.state(), open("a"));

        menu.dispatch(PointerEvent::LeaveSubmenu("a".into())).await;
        sleep(CLOSE_DELAY + ms(1)).await;
        assert_eq!(menu.take_transitions(), vec![open("a"), NavState::Closed]);
    }

    #[tokio::test(start_paused = true)]
    async fn a_new_leave_restarts_the_delay() {
        let mut menu = mount_menu();

        menu.dispatch(PointerEvent::EnterEntry("a".into())).await;
        menu.dispatch(PointerEvent::LeaveEntry("a".into())).await;
        sleep(ms(1999)).await;
        menu.dispatch(PointerEvent::EnterEntry("b".into())).await;
        menu.dispatch(PointerEvent::LeaveEntry("b".into())).await;

        sleep(ms(1999)).await;
        assert_eq!(menu.state(), open("b"));
        sleep(ms(2)).await;
        assert_eq!(
            menu.take_transitions(),
            vec![open("a"), open("b"), NavState::Closed]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_reports_the_resulting_state() {
        let menu = mount_menu();

        assert_eq!(menu.dispatch(PointerEvent::Click("b".into())).await, Some(open("b")));
        assert_eq!(
            menu.dispatch(PointerEvent::Click("b".into())).await,
            Some(NavState::Closed)
        );
        assert_eq!(
            menu.dispatch(PointerEvent::EnterEntry("unknown".into())).await,
            Some(NavState::Closed)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_the_pending_close() {
        let menu = mount_menu();
        let state = menu.subscribe();

        menu.dispatch(PointerEvent::EnterEntry("a".into())).await;
        menu.dispatch(PointerEvent::LeaveEntry("a".into())).await;
        menu.unmount().await;

        sleep(CLOSE_DELAY * 5).await;
        assert_eq!(*state.borrow(), open("a"));
        assert!(state.has_changed().is_err());
    }

    #[tokio::test]
    async fn menu_items_become_entries_with_url_targets() {
        let item = MenuItem {
            id: "m1".into(),
            label: "Magazine".into(),
            url: "/magazine".into(),
            children: vec![MenuItem {
                id: "m2".into(),
                label: "Podcast".into(),
                url: "/podcast".into(),
                children: vec![],
            }],
        };

        let entry = NavEntry::from(&item);
        assert_eq!(entry.children[0].target, "/podcast");
    }
}

mod carousel {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn cycles_through_every_slide_in_order() {
        let carousel = Carousel::mount(vec!["first", "second", "third"]).unwrap();
        let mut seen = vec![carousel.index()];

        // Sample just after each tick.
        sleep(ms(1)).await;
        for _ in 0..6 {
            sleep(CAROUSEL_PERIOD).await;
            seen.push(carousel.index());
        }

        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[tokio::test(start_paused = true)]
    async fn exposes_the_current_slide() {
        let carousel = Carousel::mount(vec!["first", "second"]).unwrap();
        sleep(CAROUSEL_PERIOD + ms(1)).await;
        assert_eq!(*carousel.current(), "second");
    }

    #[tokio::test(start_paused = true)]
    async fn no_slides_no_rotation() {
        assert!(Carousel::<&str>::mount(vec![]).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stops_advancing_after_unmount() {
        let carousel = Carousel::mount(vec![1, 2, 3]).unwrap();
        let index = carousel.subscribe();

        sleep(CAROUSEL_PERIOD + ms(1)).await;
        carousel.unmount();
        sleep(CAROUSEL_PERIOD * 10).await;

        assert_eq!(*index.borrow(), 1);
    }
}
