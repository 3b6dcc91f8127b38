use ordset::OrdSet;

fn main() {
    let mut set = OrdSet::new();
    for x in [5, 3, 8, 1, 4, 7, 9] {
        set.insert(x);
    }
    set.insert(3);
    assert!(set.contains(&4));
    set.remove(&4);
    assert!(!set.contains(&4));

    print!("{{ ");
    for x in &set {
        print!("{x}, ");
    }
    println!("}}");

    let mut cursor = set.lower_bound(&6);
    assert_eq!(cursor.get(), Some(&7));
    cursor.move_prev();
    println!("before 7 comes {:?}", cursor.get());

    let mut last = set.end();
    last.move_prev();
    println!("largest value is {:?}", last.get());
}
