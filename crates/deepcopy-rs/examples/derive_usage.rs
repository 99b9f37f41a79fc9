use deepcopy_rs::{DeepCopy, deep_copy_class};
use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

#[derive(Debug, DeepCopy)]
struct Address {
    street: String,
    city: String,
}

#[derive(Debug, DeepCopy)]
struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: Option<String>,
    pub address: Rc<RefCell<Address>>,
    pub tags: BTreeMap<String, Vec<String>>,
}

deep_copy_class! {
    #[derive(Debug)]
    pub struct Team {
        name: String,
        members: Vec<Rc<RefCell<Person>>>,
    }

    impl Team {
        pub fn new(name: String, members: Vec<Rc<RefCell<Person>>>) -> Self {
            Self { name, members }
        }

        pub fn founded(name: &str) -> Self {
            Self::new(name.to_string(), Vec::new())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let person = Person {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        age: 36,
        email: Some("ada@example.com".into()),
        address: Rc::new(RefCell::new(Address {
            street: "St James's Square".into(),
            city: "London".into(),
        })),
        tags: BTreeMap::from([("field".into(), vec!["mathematics".into()])]),
    };

    let copy = person.copy();
    copy.address.borrow_mut().city = "Paris".into();
    anyhow::ensure!(
        person.address.borrow().city == "London",
        "copy aliases the original address"
    );
    println!("original: {person:#?}");
    println!("copy:     {copy:#?}");

    let mut team = Team::founded("Analytical Engine");
    team.members.push(Rc::new(RefCell::new(person)));
    let team_copy = team.copy();
    team_copy.members[0].borrow_mut().age += 1;
    anyhow::ensure!(
        !Rc::ptr_eq(&team.members[0], &team_copy.members[0]),
        "team members are shared between copies"
    );
    anyhow::ensure!(
        team.members[0].borrow().age == 36,
        "mutating the copied team changed the original"
    );
    println!("team copy: {team_copy:#?}");

    let generic: Team = DeepCopy::deep_copy(&team);
    println!("generic copy has {} member(s)", generic.members.len());
    Ok(())
}
