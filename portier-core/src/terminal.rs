//! Badge verification loop
//!
//! The [`Terminal`] owns every peripheral the loop touches: the reader
//! input, the display, the lock and the delay source. One call to
//! [`Terminal::cycle`] waits for a badge, checks it and runs the grant or
//! refusal sequence; the firmware calls it forever.
//!
//! # Sequence
//!
//! ```text
//! boot:     lock off, "Systeme Securite" (2 s), "Scan Badge..."
//! granted:  "Acces Autorise", lock on (3 s), lock off, "Scan Badge..."
//! denied:   "Acces Refuse" (2 s), "Scan Badge..."
//! ```
//!
//! Every delay blocks; nothing can interrupt a sequence once started.

use embedded_hal::delay::DelayNs;

use crate::config::{
    ACCESS_DENIED, ACCESS_GRANTED, DENIED_MS, IDLE_PROMPT, SPLASH, SPLASH_MS, UNLOCK_DWELL_MS,
};
use crate::identifier::{Feed, Identifier, TagAssembler};
use crate::policy::{AccessPolicy, Decision};
use crate::state::{Event, State};
use crate::traits::{ByteSource, CharacterDisplay, DisplayExt, LockActuator};

/// The access terminal
pub struct Terminal<'p, S, D, L, T> {
    serial: S,
    display: D,
    lock: L,
    delay: T,
    policy: AccessPolicy<'p>,
    assembler: TagAssembler,
    state: State,
}

impl<'p, S, D, L, T> Terminal<'p, S, D, L, T>
where
    S: ByteSource,
    D: CharacterDisplay,
    L: LockActuator,
    T: DelayNs,
{
    /// Take ownership of the peripherals
    ///
    /// The lock is forced off immediately; the display is left alone until
    /// [`boot`](Self::boot).
    pub fn new(serial: S, display: D, mut lock: L, delay: T, policy: AccessPolicy<'p>) -> Self {
        lock.disengage();

        Self {
            serial,
            display,
            lock,
            delay,
            policy,
            assembler: TagAssembler::new(),
            state: State::Boot,
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// The lock actuator, for checking its state
    pub fn lock(&self) -> &L {
        &self.lock
    }

    /// Show the boot splash, then the idle prompt
    ///
    /// No serial input is read before this finishes.
    pub fn boot(&mut self) {
        self.lock.disengage();
        self.assembler.reset();

        self.display.show(SPLASH);
        self.delay.delay_ms(SPLASH_MS);
        self.display.show(IDLE_PROMPT);

        self.state = self.state.transition(Event::BootComplete);
    }

    /// Block until a complete identifier has been received
    ///
    /// Boots first if that has not happened yet.
    pub fn scan(&mut self) -> Identifier {
        if self.state == State::Boot {
            self.boot();
        }
        debug_assert!(self.state.accepts_input());

        loop {
            let byte = self.serial.read_byte();
            if let Feed::Complete(id) = self.assembler.feed(byte) {
                self.state = self.state.transition(Event::TagComplete);
                return id;
            }
        }
    }

    /// Check `id` and run the grant or refusal sequence
    ///
    /// Returns once the idle prompt is back up and the lock is off.
    pub fn evaluate(&mut self, id: &Identifier) -> Decision {
        let decision = self.policy.decide(id);

        match decision {
            Decision::Granted => {
                self.display.show(ACCESS_GRANTED);
                self.lock.engage();
                self.delay.delay_ms(UNLOCK_DWELL_MS);
                self.lock.disengage();
            }
            Decision::Denied => {
                self.display.show(ACCESS_DENIED);
                self.delay.delay_ms(DENIED_MS);
            }
        }

        self.display.show(IDLE_PROMPT);
        self.state = self.state.transition(Event::EvaluationFinished);

        decision
    }

    /// One full scan-and-evaluate pass
    pub fn cycle(&mut self) -> Decision {
        let id = self.scan();
        self.evaluate(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::string::{String, ToString};
    use std::vec::Vec;

    const TAGS: &[&str] = &["1A2B3C4D5E", "5F6G7H8I9J", "A1B2C3D4E5"];

    /// Observable output, stamped with simulated milliseconds
    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear(u64),
        Text(u64, String),
        Lock(u64, bool),
    }

    /// Simulated clock in microseconds
    type Clock = Rc<Cell<u64>>;
    type Log = Rc<RefCell<Vec<Op>>>;

    fn now_ms(clock: &Clock) -> u64 {
        clock.get() / 1000
    }

    struct MockSerial {
        input: Rc<RefCell<VecDeque<u8>>>,
    }

    impl ByteSource for MockSerial {
        fn read_byte(&mut self) -> u8 {
            self.input
                .borrow_mut()
                .pop_front()
                .expect("reader has no more bytes")
        }
    }

    struct MockDisplay {
        clock: Clock,
        log: Log,
    }

    impl CharacterDisplay for MockDisplay {
        fn clear(&mut self) {
            self.log.borrow_mut().push(Op::Clear(now_ms(&self.clock)));
        }

        fn write_text(&mut self, text: &str) {
            self.log
                .borrow_mut()
                .push(Op::Text(now_ms(&self.clock), text.to_string()));
        }
    }

    struct MockLock {
        clock: Clock,
        log: Log,
        engaged: bool,
    }

    impl LockActuator for MockLock {
        fn engage(&mut self) {
            self.engaged = true;
            self.log
                .borrow_mut()
                .push(Op::Lock(now_ms(&self.clock), true));
        }

        fn disengage(&mut self) {
            self.engaged = false;
            self.log
                .borrow_mut()
                .push(Op::Lock(now_ms(&self.clock), false));
        }

        fn is_engaged(&self) -> bool {
            self.engaged
        }
    }

    struct MockDelay {
        clock: Clock,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.clock
                .set(self.clock.get() + (ns as u64).div_ceil(1000));
        }

        fn delay_us(&mut self, us: u32) {
            self.clock.set(self.clock.get() + us as u64);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.clock.set(self.clock.get() + ms as u64 * 1000);
        }
    }

    struct Bench {
        input: Rc<RefCell<VecDeque<u8>>>,
        log: Log,
        terminal: Terminal<'static, MockSerial, MockDisplay, MockLock, MockDelay>,
    }

    impl Bench {
        fn new() -> Self {
            let clock: Clock = Rc::new(Cell::new(0));
            let log: Log = Rc::new(RefCell::new(Vec::new()));
            let input = Rc::new(RefCell::new(VecDeque::new()));

            let terminal = Terminal::new(
                MockSerial {
                    input: input.clone(),
                },
                MockDisplay {
                    clock: clock.clone(),
                    log: log.clone(),
                },
                MockLock {
                    clock: clock.clone(),
                    log: log.clone(),
                    engaged: false,
                },
                MockDelay { clock },
                AccessPolicy::new(TAGS),
            );

            Self {
                input,
                log,
                terminal,
            }
        }

        /// Boot and forget the boot output
        fn booted() -> Self {
            let mut bench = Self::new();
            bench.terminal.boot();
            bench.log.borrow_mut().clear();
            bench
        }

        fn send(&self, bytes: &[u8]) {
            self.input.borrow_mut().extend(bytes.iter().copied());
        }

        fn pending(&self) -> usize {
            self.input.borrow().len()
        }

        fn ops(&self) -> Vec<Op> {
            self.log.borrow().clone()
        }

        fn texts(&self) -> Vec<String> {
            self.ops()
                .into_iter()
                .filter_map(|op| match op {
                    Op::Text(_, text) => Some(text),
                    _ => None,
                })
                .collect()
        }

        fn lock_ops(&self) -> Vec<(u64, bool)> {
            self.ops()
                .into_iter()
                .filter_map(|op| match op {
                    Op::Lock(t, engaged) => Some((t, engaged)),
                    _ => None,
                })
                .collect()
        }
    }

    fn text(t: u64, s: &str) -> Op {
        Op::Text(t, s.to_string())
    }

    #[test]
    fn test_new_forces_lock_off() {
        let bench = Bench::new();
        assert!(!bench.terminal.lock().is_engaged());
        assert_eq!(bench.lock_ops(), [(0, false)]);
        assert_eq!(bench.terminal.state(), State::Boot);
    }

    #[test]
    fn test_boot_sequence() {
        let mut bench = Bench::new();
        bench.send(b"1A2B3C4D5E");
        bench.log.borrow_mut().clear();

        bench.terminal.boot();

        assert_eq!(
            bench.ops(),
            [
                Op::Lock(0, false),
                Op::Clear(0),
                text(0, "Systeme Securite"),
                Op::Clear(2000),
                text(2000, "Scan Badge..."),
            ]
        );
        assert_eq!(bench.terminal.state(), State::AwaitingScan);
        // Nothing read from the reader during boot
        assert_eq!(bench.pending(), 10);
    }

    #[test]
    fn test_scan_boots_first() {
        let mut bench = Bench::new();
        bench.send(b"0000000000");

        let id = bench.terminal.scan();

        assert_eq!(id, "0000000000");
        assert_eq!(bench.texts(), ["Systeme Securite", "Scan Badge..."]);
        assert_eq!(bench.terminal.state(), State::Evaluating);
    }

    #[test]
    fn test_authorized_badge_unlocks_for_dwell() {
        let mut bench = Bench::booted();
        bench.send(b"1A2B3C4D5E");

        let decision = bench.terminal.cycle();

        assert_eq!(decision, Decision::Granted);
        assert_eq!(
            bench.ops(),
            [
                Op::Clear(2000),
                text(2000, "Acces Autorise"),
                Op::Lock(2000, true),
                Op::Lock(5000, false),
                Op::Clear(5000),
                text(5000, "Scan Badge..."),
            ]
        );
    }

    #[test]
    fn test_unknown_badge_is_refused() {
        let mut bench = Bench::booted();
        bench.send(b"0000000000");

        let decision = bench.terminal.cycle();

        assert_eq!(decision, Decision::Denied);
        assert_eq!(
            bench.ops(),
            [
                Op::Clear(2000),
                text(2000, "Acces Refuse"),
                Op::Clear(4000),
                text(4000, "Scan Badge..."),
            ]
        );
        assert!(bench.lock_ops().is_empty());
        assert!(!bench.terminal.lock().is_engaged());
    }

    #[test]
    fn test_noise_between_characters_is_ignored() {
        let mut bench = Bench::booted();
        bench.send(b"1A-2B*3C4D5E");

        assert_eq!(bench.terminal.cycle(), Decision::Granted);
        assert_eq!(bench.lock_ops(), [(2000, true), (5000, false)]);
        assert_eq!(bench.pending(), 0);
    }

    #[test]
    fn test_idle_state_is_the_same_after_either_branch() {
        for (input, idle_at) in [(b"1A2B3C4D5E", 5000), (b"0000000000", 4000)] {
            let mut bench = Bench::booted();
            bench.send(input);
            bench.terminal.cycle();

            let ops = bench.ops();
            assert_eq!(
                ops[ops.len() - 2..],
                [Op::Clear(idle_at), text(idle_at, "Scan Badge...")]
            );
            assert!(!bench.terminal.lock().is_engaged());
            assert_eq!(bench.terminal.state(), State::AwaitingScan);
        }
    }

    #[test]
    fn test_evaluation_starts_at_exactly_ten_characters() {
        let mut bench = Bench::booted();
        // A tag followed by nine characters of the next one
        bench.send(b"1A2B3C4D5E000000000");

        bench.terminal.cycle();

        // Scan stopped at the tenth accepted character
        assert_eq!(bench.pending(), 9);
        assert_eq!(bench.terminal.state(), State::AwaitingScan);

        bench.send(b"0");
        assert_eq!(bench.terminal.cycle(), Decision::Denied);
        assert_eq!(bench.pending(), 0);
    }

    #[test]
    fn test_back_to_back_badges() {
        let mut bench = Bench::booted();
        bench.send(b"\r\nA1B2C3D4E5\r\n0123456789\r\n");

        assert_eq!(bench.terminal.cycle(), Decision::Granted);
        assert_eq!(bench.terminal.cycle(), Decision::Denied);
        assert_eq!(
            bench.texts(),
            [
                "Acces Autorise",
                "Scan Badge...",
                "Acces Refuse",
                "Scan Badge...",
            ]
        );
    }

    #[test]
    fn test_listed_tag_outside_alphabet_can_never_unlock() {
        let mut bench = Bench::booted();
        // G, H, I and J are dropped, so the scan keeps reading
        bench.send(b"5F6G7H8I9JABCD");

        let id = bench.terminal.scan();
        assert_eq!(id, "5F6789ABCD");
        assert_eq!(bench.terminal.evaluate(&id), Decision::Denied);
    }

    #[test]
    fn test_lowercase_tag_is_not_accepted() {
        let mut bench = Bench::booted();
        bench.send(b"1a2b3c4d5e1A2B3C4D5E");

        let id = bench.terminal.scan();
        // Lowercase letters never reach the identifier
        assert_eq!(id, "123451A2B3");
        assert_eq!(bench.pending(), 5);
    }
}
