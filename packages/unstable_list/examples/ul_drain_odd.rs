//! Removes items from an `UnstableList` while walking it forward.
#![allow(
    missing_docs,
    reason = "No need for API documentation in example code"
)]

use unstable_list::UnstableList;

fn main() {
    let mut list: UnstableList<u32> = (1..=10).collect();

    println!("Before: {:?}", list.iter().collect::<Vec<_>>());

    let mut index = 0;
    while index < list.len() {
        if list[index] % 2 == 1 {
            let removed = list.remove_at(index).expect("index is below the length");
            println!("Removed {removed} from slot {index}");

            // The last item now occupies this slot and has not been looked at yet.
            continue;
        }

        index += 1;
    }

    println!("After: {:?}", list.iter().collect::<Vec<_>>());
    println!("Capacity before truncate: {}", list.capacity());

    list.truncate();

    println!("Capacity after truncate: {}", list.capacity());
}
