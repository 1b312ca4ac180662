//! End-to-end race tests driven by real threads and wall-clock delays.
//!
//! These verify the settlement-time semantics the unit tests cannot: that
//! "first success" is decided by arrival order, not input order, and that
//! the aggregate failure reasons are index-ordered even when the failures
//! arrive shuffled.

mod util;

use any_of::test_logging::TestLogger;
use any_of::{any_of, AggregateError, AnyOf};
use any_of::{assert_eq_log, assert_log, test_log, test_phase};
use futures_lite::future;
use std::thread;
use std::time::Duration;
use util::{completable, Completable, CompletableHandle};

fn complete_after<T, E>(
    handle: CompletableHandle<T, E>,
    delay_ms: u64,
    result: Result<T, E>,
) -> thread::JoinHandle<()>
where
    T: Send + 'static,
    E: Send + 'static,
{
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(delay_ms));
        handle.complete(result);
    })
}

#[test]
fn fastest_success_wins_the_race() {
    let logger = TestLogger::from_env();
    test_phase!(logger, "fastest_success_wins_the_race");

    let (slow, slow_handle) = completable::<i32, &str>();
    let (fast, fast_handle) = completable::<i32, &str>();

    test_log!(logger, "race", "slow completes at 50ms, fast at 5ms");
    let t1 = complete_after(slow_handle, 50, Ok(1));
    let t2 = complete_after(fast_handle, 5, Ok(2));

    let result = future::block_on(any_of(vec![slow, fast]));
    assert_eq_log!(logger, result, Ok(2));

    t1.join().unwrap();
    t2.join().unwrap();
}

#[test]
fn success_wins_despite_earlier_failures() {
    let logger = TestLogger::from_env();
    test_phase!(logger, "success_wins_despite_earlier_failures");

    let (a, a_handle) = completable::<i32, &str>();
    let (b, b_handle) = completable::<i32, &str>();
    let (c, c_handle) = completable::<i32, &str>();

    test_log!(logger, "race", "two failures land before the success");
    let threads = vec![
        complete_after(a_handle, 10, Err("a")),
        complete_after(b_handle, 60, Ok(42)),
        complete_after(c_handle, 25, Err("c")),
    ];

    let result = future::block_on(any_of(vec![a, b, c]));
    assert_eq_log!(logger, result, Ok(42));

    for t in threads {
        t.join().unwrap();
    }
}

#[test]
fn all_fail_reasons_are_input_ordered_not_arrival_ordered() {
    let logger = TestLogger::from_env();
    test_phase!(logger, "all_fail_reasons_are_input_ordered_not_arrival_ordered");

    let (x, x_handle) = completable::<i32, &str>();
    let (y, y_handle) = completable::<i32, &str>();
    let (z, z_handle) = completable::<i32, &str>();

    test_log!(logger, "race", "arrival order is y, z, x");
    let threads = vec![
        complete_after(x_handle, 80, Err("x")),
        complete_after(y_handle, 10, Err("y")),
        complete_after(z_handle, 40, Err("z")),
    ];

    let result = future::block_on(any_of(vec![x, y, z]));
    let agg = match result {
        Err(agg) => agg,
        Ok(v) => {
            eprintln!("{}", logger.report());
            panic!("expected aggregate failure, got Ok({v})");
        }
    };
    assert_eq_log!(logger, agg.reasons(), &["x", "y", "z"]);

    for t in threads {
        t.join().unwrap();
    }
}

#[test]
fn empty_input_rejects_without_blocking() {
    let logger = TestLogger::from_env();
    test_phase!(logger, "empty_input_rejects_without_blocking");

    let race: AnyOf<Completable<i32, &str>, &str> = any_of(vec![]);
    let result = future::block_on(race);
    let agg: AggregateError<&str> = match result {
        Err(agg) => agg,
        Ok(v) => {
            eprintln!("{}", logger.report());
            panic!("expected empty aggregate, got Ok({v})");
        }
    };
    assert_log!(logger, agg.is_empty(), "reason list should be empty");
}

#[test]
fn late_settlement_after_the_race_is_harmless() {
    let logger = TestLogger::from_env();
    test_phase!(logger, "late_settlement_after_the_race_is_harmless");

    let (winner, winner_handle) = completable::<i32, &str>();
    let (loser, loser_handle) = completable::<i32, &str>();

    let t = complete_after(winner_handle, 5, Ok(9));
    let result = future::block_on(any_of(vec![winner, loser]));
    assert_eq_log!(logger, result, Ok(9));
    t.join().unwrap();

    // The losing future was dropped with the combinator; completing its
    // handle now must neither panic nor wake anything.
    loser_handle.complete(Err("too late"));
    test_log!(logger, "race", "late completion absorbed");
}

#[test]
fn single_contender_race_resolves() {
    let logger = TestLogger::from_env();
    test_phase!(logger, "single_contender_race_resolves");

    let (only, only_handle) = completable::<i32, &str>();
    let t = complete_after(only_handle, 5, Ok(7));

    let result = future::block_on(any_of(vec![only]));
    assert_eq_log!(logger, result, Ok(7));
    t.join().unwrap();
}
