use classroom_collections::collections::circular::CircularQueue;
use classroom_collections::collections::contiguous::DynamicArray;
use classroom_collections::collections::error::ContainerError;
use classroom_collections::collections::linked::LinkedChain;

#[derive(Debug)]
struct Pet {
    name: &'static str,
}

impl Drop for Pet {
    fn drop(&mut self) {
        println!("Dropped {}", self.name);
    }
}

fn main() -> Result<(), ContainerError> {
    println!("\n[DynamicArray]\n");

    let mut arr = DynamicArray::new();
    println!("{arr:?}");

    arr.add_to_front("1a".to_string())?;
    for i in 2..=9 {
        arr.add_to_back(format!("{i}a"))?;
        println!("{}", arr.size());
    }
    println!("{arr:?}");

    arr.add_to_back("10a".to_string())?;
    println!("{arr}");
    println!("{:?}, {arr:?}", arr.remove_from_front()?);
    println!("{:?}, {arr:?}", arr.remove_from_back()?);

    println!("\n[LinkedChain]\n");

    let mut chain = LinkedChain::new();
    chain.add_to_front("i'm the back!")?;
    chain.add_to_front("i'm the front!")?;
    chain.add_to_back("i'm even further back!")?;
    println!("{chain}, size {}", chain.size());

    while !chain.is_empty() {
        chain.remove_from_back()?;
        println!("{chain}, size {}", chain.size());
    }
    println!("{:?}", chain.remove_from_back());

    println!("\n[CircularQueue]\n");

    let mut queue = CircularQueue::new();
    for word in ["one", "two", "three", "four"] {
        queue.enqueue(word)?;
        println!("{:?}", queue.backing_store());
    }
    for _ in 0..3 {
        queue.dequeue()?;
        println!("{:?}", queue.backing_store());
    }
    println!("{queue:?}");

    println!("\n[Drops]\n");

    let mut pets = CircularQueue::with_capacity(1);
    pets.extend([Pet { name: "Rex" }, Pet { name: "Tom" }]);
    println!("{:?}", pets.dequeue()?);
    println!("{:?}", pets.enqueue(None));

    Ok(())
}
