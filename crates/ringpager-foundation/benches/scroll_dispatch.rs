use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ringpager_foundation::{
    circular_index, CircularPager, PageContentProvider, PagerScrollState, PagerSpec, SlotRole,
};

struct Indices(usize);

impl PageContentProvider for Indices {
    type Content = usize;

    fn page_count(&self) -> usize {
        self.0
    }

    fn content_for_page(&self, index: usize, _role: SlotRole) -> usize {
        index
    }
}

fn pager(page_count: usize) -> (CircularPager<usize>, PagerScrollState) {
    let scroll_state = PagerScrollState::new(400.0);
    let mut pager = CircularPager::new(PagerSpec::default());
    pager.attach_surface(scroll_state.clone());
    pager.set_provider(Rc::new(Indices(page_count)));
    (pager, scroll_state)
}

fn bench_circular_index(c: &mut Criterion) {
    c.bench_function("circular_index", |b| {
        b.iter(|| {
            let mut index = 0;
            for delta in -64isize..64 {
                index = circular_index(black_box(index), black_box(delta), 37).unwrap_or(0);
            }
            index
        })
    });
}

fn bench_scroll_within_band(c: &mut Criterion) {
    let (mut pager, scroll_state) = pager(50);
    c.bench_function("scroll_within_band", |b| {
        b.iter(|| {
            scroll_state.scroll_by(black_box(20.0));
            pager.on_scroll_changed();
            scroll_state.scroll_by(black_box(-20.0));
            pager.on_scroll_changed();
            scroll_state.take_pending_notifications();
        })
    });
}

fn bench_page_transition(c: &mut Criterion) {
    let (mut pager, scroll_state) = pager(50);
    c.bench_function("page_transition", |b| {
        b.iter(|| {
            scroll_state.scroll_by(black_box(400.0));
            pager.on_scroll_changed();
            scroll_state.take_pending_notifications();
        })
    });
}

criterion_group!(
    benches,
    bench_circular_index,
    bench_scroll_within_band,
    bench_page_transition
);
criterion_main!(benches);
