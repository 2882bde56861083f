use std::hint;
use std::time::Instant;
use confluence::Arena;
use confluence::Node;
use confluence::Strategy;
use confluence::find_intersection_with;

fn timeit<F: FnOnce()>(f: F) -> f64 {
  let start = Instant::now();
  f();
  let stop = Instant::now();
  stop.saturating_duration_since(start).as_nanos() as f64
}

fn run_bench<F: FnOnce(usize, usize)>(iters: usize, len: usize, name: &str, f: F) {
  let iters = hint::black_box(iters);
  let len = hint::black_box(len);
  let duration = timeit(|| f(iters, len));
  let duration = duration / ((iters * len) as f64);
  print!("{:25} {:.3} ns\n", name, duration);
}

#[inline(never)]
fn make_list<'a>(arena: &'a Arena<Node<'a, u64>>, len: usize, tail: Option<&'a Node<'a, u64>>) -> Option<&'a Node<'a, u64>> {
  let mut r = tail;
  for i in (0 .. len).rev() {
    r = Some(&*arena.alloc(Node::new(i as u64, r)));
  }
  r
}

#[inline(never)]
fn bench_search(strategy: Strategy, iters: usize, len: usize) {
  let arena = Arena::new();
  let tail = make_list(&arena, len / 2, None);
  let a = make_list(&arena, len / 4, tail);
  let b = make_list(&arena, len / 8, tail);

  for _ in 0 .. iters {
    let _: _ = hint::black_box(find_intersection_with(strategy, hint::black_box(a), b));
  }
}

#[inline(never)]
fn bench_build_confluence(iters: usize, len: usize) {
  for _ in 0 .. iters {
    let arena = Arena::new();
    let _: _ = hint::black_box(make_list(&arena, len, None));
  }
}

#[inline(never)]
fn bench_build_bumpalo(iters: usize, len: usize) {
  #[inline(never)]
  fn make_list<'a>(bump: &'a bumpalo::Bump, len: usize) -> Option<&'a Node<'a, u64>> {
    let mut r = None;
    for i in (0 .. len).rev() {
      r = Some(&*bump.alloc(Node::new(i as u64, r)));
    }
    r
  }

  for _ in 0 .. iters {
    let bump = bumpalo::Bump::new();
    let _: _ = hint::black_box(make_list(&bump, len));
  }
}

fn main() {
  let iters = 100;
  let len = 100_000;

  run_bench(iters, len, "build/confluence", bench_build_confluence);
  run_bench(iters, len, "build/bumpalo", bench_build_bumpalo);
  run_bench(iters, len, "search/two-pointer", |i, n| bench_search(Strategy::TwoPointer, i, n));
  run_bench(iters, len, "search/node-set", |i, n| bench_search(Strategy::NodeSet, i, n));
}
