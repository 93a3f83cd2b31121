//! Stress and contract tests for the HFT engine.
//!
//! These tests verify:
//! 1. Every submission is acknowledged, whatever the inputs
//! 2. The simulated latency floor holds on every call
//! 3. Identical submissions are never deduplicated
//! 4. Concurrent submissions stay independent of each other
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::thread;
use std::time::{Duration, Instant};

use hft_engine::{Engine, EngineStatus, FixedLatency, NoLatency, OrderRequest};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Simulated latency floor of the default engine
const FLOOR: Duration = Duration::from_micros(50);

/// Number of random orders pushed through the no-latency engine
const RANDOM_ORDER_COUNT: usize = 100_000;

/// Threads used by the concurrency tests
const THREADS: usize = 8;

/// Orders submitted by each thread
const ORDERS_PER_THREAD: usize = 200;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate deterministic orders covering extreme and degenerate values.
///
/// Uses a seeded RNG for reproducibility. Same seed = same orders.
fn generate_random_orders(count: usize, seed: u64) -> Vec<OrderRequest> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let special_prices = [
        0.0,
        -0.0,
        -1.0,
        f64::MIN,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];
    let special_quantities = [0, -1, i32::MIN, i32::MAX];

    (0..count)
        .map(|i| {
            let len = rng.gen_range(0..12);
            let symbol: String = (0..len)
                .map(|_| rng.gen_range(b' '..=b'~') as char)
                .collect();

            let price = if rng.gen_bool(0.1) {
                special_prices[rng.gen_range(0..special_prices.len())]
            } else {
                rng.gen_range(-1e9..1e9)
            };

            let quantity = if rng.gen_bool(0.1) {
                special_quantities[rng.gen_range(0..special_quantities.len())]
            } else {
                rng.gen::<i32>()
            };

            // Keep a readable symbol every so often
            let symbol = if i % 10 == 0 { format!("SYM{i}") } else { symbol };
            OrderRequest::new(symbol, price, quantity)
        })
        .collect()
}

fn same_order(a: &OrderRequest, b: &OrderRequest) -> bool {
    a.symbol == b.symbol
        && a.quantity == b.quantity
        && a.price.to_bits() == b.price.to_bits()
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[test]
fn example_order_is_acknowledged_after_floor() {
    let engine: Engine = Engine::default();

    let start = Instant::now();
    let status = engine.submit("AAPL", 172.35, 100);
    let elapsed = start.elapsed();

    assert_eq!(status, EngineStatus::Executed);
    assert_eq!(status.code(), 1);
    assert!(elapsed >= FLOOR, "returned after {elapsed:?}, floor {FLOOR:?}");
}

#[test]
fn init_always_returns_zero() {
    let engine: Engine = Engine::default();
    for _ in 0..100 {
        assert_eq!(engine.init().code(), 0);
    }
}

/// Every input, however degenerate, is acknowledged verbatim.
#[test]
fn random_inputs_are_always_acknowledged() {
    let engine = Engine::with_latency(NoLatency).log_acknowledgements(false);
    let orders = generate_random_orders(RANDOM_ORDER_COUNT, 42);

    let start = Instant::now();
    for order in &orders {
        let ack = engine.send_order(order);
        assert!(
            same_order(ack.order(), order),
            "acknowledgement changed the order: {order:?} -> {:?}",
            ack.order()
        );
        assert_eq!(engine.submit(&order.symbol, order.price, order.quantity).code(), 1);
    }
    let elapsed = start.elapsed();

    println!(
        "  {} orders acknowledged in {:.2?} ({:.0} orders/sec)",
        RANDOM_ORDER_COUNT * 2,
        elapsed,
        (RANDOM_ORDER_COUNT * 2) as f64 / elapsed.as_secs_f64()
    );
}

/// Latency floor holds on every call of a sequence, not just on average.
#[test]
fn latency_floor_holds_per_call() {
    let engine = Engine::with_latency(FixedLatency::default()).log_acknowledgements(false);
    let orders = generate_random_orders(500, 7);

    for order in &orders {
        let ack = engine.send_order(order);
        assert!(ack.latency() >= FLOOR, "latency {:?} under floor", ack.latency());
    }
}

#[test]
fn duplicate_submissions_are_independent() {
    let engine = Engine::with_latency(FixedLatency::default()).log_acknowledgements(false);
    let order = OrderRequest::new("AAPL", 172.35, 100);

    let first = engine.send_order(&order);
    let second = engine.send_order(&order);

    assert_eq!(first.order(), second.order());
    assert!(first.latency() >= FLOOR);
    assert!(second.latency() >= FLOOR);
    assert_eq!(engine.submit("AAPL", 172.35, 100), EngineStatus::Executed);
    assert_eq!(engine.submit("AAPL", 172.35, 100), EngineStatus::Executed);
}

#[test]
fn custom_latency_floor() {
    let floor = Duration::from_micros(500);
    let engine = Engine::with_latency(FixedLatency::new(floor)).log_acknowledgements(false);

    let start = Instant::now();
    engine.submit("MSFT", 1.0, 1);
    assert!(start.elapsed() >= floor);
}

// ============================================================================
// CONCURRENCY TESTS
// ============================================================================

/// Threads sharing one engine each see the floor and the success code.
#[test]
fn concurrent_submissions_are_independent() {
    let engine = Engine::with_latency(FixedLatency::default()).log_acknowledgements(false);

    let start = Instant::now();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let engine = &engine;
                scope.spawn(move || {
                    for i in 0..ORDERS_PER_THREAD {
                        let order = OrderRequest::new(format!("T{t}"), i as f64, i as i32);
                        let ack = engine.send_order(&order);
                        assert_eq!(ack.order(), &order);
                        assert!(ack.latency() >= FLOOR);
                        assert_eq!(engine.submit("AAPL", 172.35, 100).code(), 1);
                    }
                    ORDERS_PER_THREAD * 2
                })
            })
            .collect();

        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, THREADS * ORDERS_PER_THREAD * 2);
    });
    let elapsed = start.elapsed();

    println!(
        "  {} threads x {} orders in {:.2?}",
        THREADS,
        ORDERS_PER_THREAD * 2,
        elapsed
    );
}

/// Concurrent callers do not serialize behind each other.
///
/// With no shared lock, eight threads sleeping 5ms each must finish well
/// before 8 x 5ms. The bound is loose to tolerate slow CI machines.
#[test]
fn concurrent_submissions_do_not_contend() {
    let delay = Duration::from_millis(5);
    let engine = Engine::with_latency(FixedLatency::new(delay)).log_acknowledgements(false);

    let start = Instant::now();
    thread::scope(|scope| {
        for t in 0..THREADS {
            let engine = &engine;
            scope.spawn(move || {
                let ack = engine.send_order(&OrderRequest::new(format!("T{t}"), 1.0, 1));
                assert!(ack.latency() >= delay);
            });
        }
    });
    let elapsed = start.elapsed();

    assert!(elapsed >= delay);
    assert!(
        elapsed < delay * THREADS as u32,
        "threads appear serialized: {elapsed:?}"
    );
}
