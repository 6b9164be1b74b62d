use nextcursor::{Cursor, End, Mode, Query, Result, Step};
use parking_lot::RwLock;

fn main() -> Result<()> {
    let numbers = [1, 2, 3, 4, 5];

    let mut cursor = Cursor::with_predicate(&numbers, |n: &i32| *n > 2, Mode::StopAtEnd);
    assert!(cursor.can_continue());
    assert_eq!(cursor.next(), Step::Item(3));
    assert_eq!(cursor.next(), Step::Item(4));
    assert_eq!(cursor.try_next()?, 5);
    assert_eq!(cursor.next(), Step::End(End::Exhausted));
    // The raw source still has elements
    assert!(cursor.can_continue());

    let mut cursor = Cursor::with_predicate(&numbers, |n: &i32| *n > 2, Mode::Repeat);
    let cycled = cursor.iter().take(7).collect::<Vec<_>>();
    assert_eq!(cycled, vec![3, 4, 5, 3, 4, 5, 3]);

    let empty: [i32; 0] = [];
    let mut cursor = Cursor::new(&empty, Mode::Repeat);
    assert!(!cursor.can_continue());
    assert_eq!(cursor.next(), Step::End(End::SourceEmpty));

    // Live collection, read afresh on every call
    let queue = RwLock::new(vec!["a"]);
    let mut cursor = Cursor::from(&queue);
    assert_eq!(cursor.next(), Step::Item("a"));
    queue.write().push("b");
    assert_eq!(cursor.next(), Step::Item("b"));

    // Lazily evaluated sequence
    let squares = Query::new(|| (1..=4u32).map(|n| n * n));
    let mut cursor = Cursor::with_predicate(&squares, |n: &u32| n % 2 == 0, Mode::Repeat);
    let mut view = cursor.view();
    assert_eq!(view, vec![4, 16]);
    view.reverse();
    assert_eq!(cursor.next_in(&view), Step::Item(16));

    let mode: Mode = "repeat".parse()?;
    println!("{mode}: {:?}", cursor);

    Ok(())
}
