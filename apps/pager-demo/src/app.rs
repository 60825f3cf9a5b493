use std::rc::Rc;

use ringpager_core::collections::sorted_indices;
use ringpager_foundation::{
    CircularPager, FnObserver, PageContentProvider, PagerScrollState, PagerSpec, SlotRole,
};

const TITLE: &str = "ringpager demo";
const VIEWPORT_WIDTH: f32 = 390.0;

/// A titled card, standing in for a rendered page view.
#[derive(Debug)]
struct Card {
    title: String,
}

struct CardDeck {
    titles: Vec<String>,
}

impl CardDeck {
    fn new(page_count: usize) -> Self {
        Self {
            titles: (0..page_count).map(|i| format!("Card #{i}")).collect(),
        }
    }
}

impl PageContentProvider for CardDeck {
    type Content = Card;

    fn page_count(&self) -> usize {
        self.titles.len()
    }

    fn content_for_page(&self, index: usize, role: SlotRole) -> Card {
        log::trace!("building {:?} card for page {}", role, index);
        Card {
            title: self.titles[index].clone(),
        }
    }
}

/// Plays a scripted session of swipes, jumps and taps.
pub(crate) fn run(page_count: usize) {
    println!("=== {TITLE} ({page_count} pages) ===");

    let scroll_state = PagerScrollState::new(VIEWPORT_WIDTH);
    let mut pager = CircularPager::new(PagerSpec::new().disable_scroll_on_single_page(true));
    pager.add_observer(Box::new(
        FnObserver::default()
            .page_changed(|index| println!("  page changed -> {index}"))
            .prefetch_hint(|indices| println!("  prefetch {:?}", sorted_indices(indices)))
            .scroll_to(|point| log::info!("virtual scroll x = {:.1}", point.x))
            .page_tapped(|index| println!("  tapped page {index}")),
    ));
    pager.attach_surface(scroll_state.clone());
    pager.set_provider(Rc::new(CardDeck::new(page_count)));

    if pager.page_count() == 0 {
        println!("Nothing to show.");
        return;
    }

    println!("\n--- Swipe forward past the end ---");
    for _ in 0..page_count + 1 {
        drag(&mut pager, &scroll_state, VIEWPORT_WIDTH);
    }

    println!("\n--- Half a swipe back, then let go ---");
    drag(&mut pager, &scroll_state, -VIEWPORT_WIDTH / 2.0);
    drag(&mut pager, &scroll_state, VIEWPORT_WIDTH / 2.0);

    println!("\n--- Swipe back past the start ---");
    for _ in 0..2 {
        drag(&mut pager, &scroll_state, -VIEWPORT_WIDTH);
    }

    println!("\n--- Jump to the last page and tap it ---");
    pager.set_current_page_index(page_count - 1);
    pager.perform_tap();

    describe(&pager);
}

/// Applies a drag and delivers its scroll notifications, as a host event
/// loop would.
fn drag(pager: &mut CircularPager<Card>, scroll_state: &PagerScrollState, delta: f32) {
    scroll_state.scroll_by(delta);
    for _ in 0..scroll_state.take_pending_notifications() {
        pager.on_scroll_changed();
    }
}

fn describe(pager: &CircularPager<Card>) {
    println!("\n--- Final window ---");
    for role in SlotRole::ALL {
        let label = format!("{role:?}");
        match pager.slot_content(role) {
            Some(card) => println!("  {label:<8} {}", card.title),
            None => println!("  {label:<8} (empty)"),
        }
    }
    println!("  {:?}", pager.stats());
}
