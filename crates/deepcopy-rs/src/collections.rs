use std::{
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
    hash::{BuildHasher, Hash},
};

use crate::DeepCopy;

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Self {
        self.as_ref().map(DeepCopy::deep_copy)
    }
}

impl<T: DeepCopy, E: DeepCopy> DeepCopy for Result<T, E> {
    fn deep_copy(&self) -> Self {
        match self {
            Ok(value) => Ok(value.deep_copy()),
            Err(error) => Err(error.deep_copy()),
        }
    }
}

impl<T: DeepCopy, const N: usize> DeepCopy for [T; N] {
    fn deep_copy(&self) -> Self {
        self.each_ref().map(DeepCopy::deep_copy)
    }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<T: DeepCopy> DeepCopy for VecDeque<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<T: DeepCopy> DeepCopy for LinkedList<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<T: DeepCopy + Ord> DeepCopy for BinaryHeap<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<K, V, S> DeepCopy for HashMap<K, V, S>
where
    K: DeepCopy + Eq + Hash,
    V: DeepCopy,
    S: BuildHasher + Clone,
{
    fn deep_copy(&self) -> Self {
        let mut map = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for (key, value) in self {
            map.insert(key.deep_copy(), value.deep_copy());
        }
        map
    }
}

impl<T, S> DeepCopy for HashSet<T, S>
where
    T: DeepCopy + Eq + Hash,
    S: BuildHasher + Clone,
{
    fn deep_copy(&self) -> Self {
        let mut set = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for value in self {
            set.insert(value.deep_copy());
        }
        set
    }
}

impl<K: DeepCopy + Ord, V: DeepCopy> DeepCopy for BTreeMap<K, V> {
    fn deep_copy(&self) -> Self {
        self.iter()
            .map(|(key, value)| (key.deep_copy(), value.deep_copy()))
            .collect()
    }
}

impl<T: DeepCopy + Ord> DeepCopy for BTreeSet<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: DeepCopy),+> DeepCopy for ($($name,)+) {
            #[allow(non_snake_case)]
            fn deep_copy(&self) -> Self {
                let ($($name,)+) = self;
                ($($name.deep_copy(),)+)
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);
impl_tuple!(A, B, C, D, E, F, G, H);
