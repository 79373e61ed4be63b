use integration::{AFTER_REMOVAL, KEYS};
use skipset::SkipSet;

fn main() {
  let mut set = SkipSet::new();
  for k in KEYS {
    set.insert(k);
  }

  println!("Skip list structure:");
  print!("{set}");

  println!("Is 60 in the skip list? {}", set.contains(&60));
  println!("Is 10 in the skip list? {}", set.contains(&10));
  assert!(set.contains(&60));
  assert!(!set.contains(&10));

  println!("Deleting 60...");
  set.remove(&60);
  println!("Is 60 in the skip list? {}", set.contains(&60));
  assert!(!set.contains(&60));

  println!("Skip list structure after deletion:");
  print!("{set}");

  assert_eq!(set.iter().copied().collect::<Vec<_>>(), AFTER_REMOVAL);
  for (level, mut keys) in set.levels() {
    assert!(keys.all(|&k| k != 60), "60 still linked on level {level}");
  }
}
