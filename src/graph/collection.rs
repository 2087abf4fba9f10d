use std::collections::HashMap;

use anyhow::{Result, bail};

use super::types::{Edge, Node};

pub trait Keyed {
	fn key(&self) -> u32;
}

impl Keyed for Node {
	fn key(&self) -> u32 {
		self.id
	}
}

impl Keyed for Edge {
	fn key(&self) -> u32 {
		self.id
	}
}

/// Insertion-ordered items with unique keys.
#[derive(Clone, Debug)]
pub struct Collection<T> {
	items: Vec<T>,
	index: HashMap<u32, usize>,
}

impl<T> Default for Collection<T> {
	fn default() -> Self {
		Self {
			items: Vec::new(),
			index: HashMap::new(),
		}
	}
}

impl<T: Keyed> Collection<T> {
	pub fn add(&mut self, item: T) -> Result<()> {
		let key = item.key();
		if self.index.contains_key(&key) {
			bail!("duplicate key {key}");
		}
		self.index.insert(key, self.items.len());
		self.items.push(item);
		Ok(())
	}

	/// Swap in a new set of items. On error the current contents are kept.
	pub fn replace(&mut self, items: impl IntoIterator<Item = T>) -> Result<()> {
		let mut next = Self::default();
		for item in items {
			next.add(item)?;
		}
		*self = next;
		Ok(())
	}

	pub fn get(&self, key: u32) -> Option<&T> {
		self.index.get(&key).map(|&pos| &self.items[pos])
	}

	pub fn contains(&self, key: u32) -> bool {
		self.index.contains_key(&key)
	}

	/// Keys are not allowed to change through this.
	pub fn update_all(&mut self, mut f: impl FnMut(&mut T)) {
		for item in &mut self.items {
			f(item);
		}
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}

	pub fn as_slice(&self) -> &[T] {
		&self.items
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::types::Color;

	fn node(id: u32) -> Node {
		Node {
			id,
			label: format!("n{id}"),
			color: Color::solid("#000000"),
			size: 10.0,
			base_size: 10.0,
			group: None,
		}
	}

	#[test]
	fn add_rejects_duplicate_keys() {
		let mut nodes = Collection::default();
		nodes.add(node(1)).unwrap();
		assert!(nodes.add(node(1)).is_err());
		assert_eq!(nodes.as_slice().len(), 1);
	}

	#[test]
	fn replace_keeps_contents_on_error() {
		let mut nodes = Collection::default();
		nodes.replace([node(1), node(2)]).unwrap();

		assert!(nodes.replace([node(3), node(3)]).is_err());
		let ids: Vec<u32> = nodes.iter().map(|n| n.id).collect();
		assert_eq!(ids, vec![1, 2]);
	}

	#[test]
	fn update_all_preserves_order_and_keys() {
		let mut nodes = Collection::default();
		nodes.replace([node(5), node(3), node(9)]).unwrap();

		nodes.update_all(|n| n.size += 1.0);
		assert_eq!(nodes.get(3).map(|n| n.size), Some(11.0));
		assert!(nodes.contains(9));
		assert!(!nodes.contains(4));
		let ids: Vec<u32> = nodes.iter().map(|n| n.id).collect();
		assert_eq!(ids, vec![5, 3, 9]);
	}
}
