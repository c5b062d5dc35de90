use super::*;

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn drained_callbacks_receive_frame_time() {
    let clock = FrameClock::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let registration = {
        let seen = Rc::clone(&seen);
        clock.with_frame_nanos(move |time| seen.borrow_mut().push(time))
    };
    assert!(clock.has_frame_callbacks());

    clock.drain_frame_callbacks(FRAME_INTERVAL_NANOS);
    drop(registration);

    assert_eq!(seen.borrow().as_slice(), &[FRAME_INTERVAL_NANOS]);
    assert!(!clock.has_frame_callbacks());
    assert_eq!(clock.last_frame_nanos(), Some(FRAME_INTERVAL_NANOS));
}

#[test]
fn cancelled_callback_never_runs() {
    let clock = FrameClock::new();
    let ran = Rc::new(RefCell::new(false));

    let registration = {
        let ran = Rc::clone(&ran);
        clock.with_frame_nanos(move |_| *ran.borrow_mut() = true)
    };
    registration.cancel();
    clock.drain_frame_callbacks(1);

    assert!(!*ran.borrow());
    assert_eq!(clock.pending_frame_callbacks(), 0);
}

#[test]
fn dropping_registration_cancels_callback() {
    let clock = FrameClock::new();
    let ran = Rc::new(RefCell::new(false));

    {
        let ran = Rc::clone(&ran);
        let _registration = clock.with_frame_nanos(move |_| *ran.borrow_mut() = true);
    }
    clock.drain_frame_callbacks(1);

    assert!(!*ran.borrow());
}

#[test]
fn disarmed_registration_still_runs() {
    let clock = FrameClock::new();
    let ran = Rc::new(RefCell::new(false));

    {
        let ran = Rc::clone(&ran);
        clock
            .with_frame_nanos(move |_| *ran.borrow_mut() = true)
            .disarm();
    }
    clock.drain_frame_callbacks(1);

    assert!(*ran.borrow());
}

#[test]
fn callbacks_registered_during_drain_run_next_frame() {
    let clock = FrameClock::new();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let follow_up = Rc::new(RefCell::new(None));

    {
        let clock_for_callback = clock.clone();
        let frames = Rc::clone(&frames);
        let follow_up = Rc::clone(&follow_up);
        clock
            .with_frame_nanos(move |time| {
                frames.borrow_mut().push(time);
                let frames = Rc::clone(&frames);
                let registration = clock_for_callback
                    .with_frame_nanos(move |time| frames.borrow_mut().push(time));
                *follow_up.borrow_mut() = Some(registration);
            })
            .disarm();
    }

    clock.drain_frame_callbacks(10);
    assert_eq!(frames.borrow().as_slice(), &[10]);
    assert_eq!(clock.pending_frame_callbacks(), 1);

    clock.drain_frame_callbacks(20);
    assert_eq!(frames.borrow().as_slice(), &[10, 20]);
}

#[test]
fn registration_outliving_clock_is_harmless() {
    let clock = FrameClock::new();
    let registration = clock.with_frame_nanos(|_| {});
    drop(clock);
    registration.cancel();
}
