//! Event-stream depth limiting.

use pulldown_cmark::Event;

/// Iterator adapter enforcing a maximum element nesting depth.
///
/// Elements that would open beyond `max_depth` levels are dropped whole:
/// the start event, everything inside, and the matching end event. The
/// surrounding document is unaffected.
pub struct NestingLimiter<I> {
    events: I,
    max_depth: usize,
    depth: usize,
}

impl<I> NestingLimiter<I> {
    pub fn new(events: I, max_depth: usize) -> Self {
        Self {
            events,
            max_depth,
            depth: 0,
        }
    }
}

impl<'a, I> Iterator for NestingLimiter<I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Event<'a>> {
        loop {
            let event = self.events.next()?;
            match event {
                Event::Start(_) => {
                    if self.depth == self.max_depth {
                        // Swallow the whole subtree.
                        let mut pending = 1_usize;
                        while pending > 0 {
                            match self.events.next()? {
                                Event::Start(_) => pending += 1,
                                Event::End(_) => pending -= 1,
                                _ => {}
                            }
                        }
                        continue;
                    }
                    self.depth += 1;
                }
                Event::End(_) => self.depth = self.depth.saturating_sub(1),
                _ => {}
            }
            return Some(event);
        }
    }
}
