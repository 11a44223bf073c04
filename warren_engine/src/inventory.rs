//! Containers and the player's inventory.
//!
//! A `Container` holds items up to a bulk capacity. An `Inventory` is an
//! ordered set of uniquely named containers; the player always has one called
//! "hands" with room for two bulk units.

use std::fmt;

use log::info;
use warren_data::HANDS;

use crate::error::InventoryError;
use crate::item::{Item, WorldObject};

/// Capacity of the player's hands.
pub const HANDS_CAPACITY: u32 = 2;

/// A named, bulk-limited holder of items.
#[derive(Debug, Clone)]
pub struct Container {
    pub name: String,
    pub short_desc: String,
    pub capacity: u32,
    contents: Vec<Item>,
}

impl Container {
    pub fn new(name: &str, short_desc: &str, capacity: u32) -> Self {
        Self {
            name: name.to_string(),
            short_desc: short_desc.to_string(),
            capacity,
            contents: Vec::new(),
        }
    }

    /// The player's hands.
    pub fn hands() -> Self {
        Self::new(HANDS, "your hands", HANDS_CAPACITY)
    }

    pub fn contents(&self) -> &[Item] {
        &self.contents
    }

    /// Total bulk of everything inside.
    pub fn bulk(&self) -> u32 {
        self.contents.iter().map(Item::bulk).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bulk() >= self.capacity
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.contents.iter().any(|item| item.matches_name(name))
    }

    /// Find the first item with this name.
    ///
    /// # Errors
    /// - `ItemNotFound` if nothing inside has that name
    pub fn get(&self, name: &str) -> Result<&Item, InventoryError> {
        self.contents
            .iter()
            .find(|item| item.matches_name(name))
            .ok_or_else(|| self.not_found(name))
    }

    /// Check whether `item` could be added without exceeding capacity.
    ///
    /// # Errors
    /// - `ContainerFull` if there's no room left at all
    /// - `CannotFit` if there is room, but not enough for this item
    pub fn check_fit(&self, item: &Item) -> Result<(), InventoryError> {
        let used = self.bulk();
        if used >= self.capacity {
            return Err(InventoryError::ContainerFull {
                container: self.name.clone(),
                item: item.name.clone(),
            });
        }
        if used + item.bulk() > self.capacity {
            return Err(InventoryError::CannotFit {
                container: self.name.clone(),
                item: item.name.clone(),
            });
        }
        Ok(())
    }

    /// Add an item. The item is only consumed if it fits.
    ///
    /// # Errors
    /// - see [`Container::check_fit`]; on error the item is returned alongside
    pub fn insert(&mut self, item: Item) -> Result<(), (InventoryError, Item)> {
        match self.check_fit(&item) {
            Ok(()) => {
                self.contents.push(item);
                Ok(())
            },
            Err(err) => Err((err, item)),
        }
    }

    /// Remove and return the first item with this name.
    ///
    /// # Errors
    /// - `ItemNotFound` if nothing inside has that name
    pub fn remove(&mut self, name: &str) -> Result<Item, InventoryError> {
        let pos = self
            .contents
            .iter()
            .position(|item| item.matches_name(name))
            .ok_or_else(|| self.not_found(name))?;
        Ok(self.contents.remove(pos))
    }

    /// Empty the container, returning everything that was in it.
    pub fn take_all(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.contents)
    }

    /// Contents as display lines, or a note that it's empty.
    pub fn list_contents(&self) -> String {
        if self.contents.is_empty() {
            return format!("There's nothing in your {}.", self.name);
        }
        let mut lines = vec![format!("In your {} ({}/{}):", self.name, self.bulk(), self.capacity)];
        lines.extend(self.contents.iter().map(|item| format!("  {} - {}", item.name, item.short_desc)));
        lines.join("\n")
    }

    fn not_found(&self, name: &str) -> InventoryError {
        InventoryError::ItemNotFound {
            item: name.to_string(),
            container: self.name.clone(),
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.short_desc)
    }
}

/// A held item and the container holding it.
#[derive(Debug, Clone, Copy)]
pub struct Found<'a> {
    pub container: &'a Container,
    pub item: &'a Item,
}

/// The containers a player carries, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    containers: Vec<Container>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container.
    ///
    /// # Errors
    /// - `DuplicateContainer` if one with the same name is already carried
    pub fn add_container(&mut self, container: Container) -> Result<(), InventoryError> {
        if self.has_container(&container.name) {
            return Err(InventoryError::DuplicateContainer(container.name));
        }
        info!("inventory: added container '{}'", container.name);
        self.containers.push(container);
        Ok(())
    }

    /// Remove a container and everything in it.
    ///
    /// # Errors
    /// - `ContainerNotFound` if no container has that name
    pub fn remove_container(&mut self, name: &str) -> Result<Container, InventoryError> {
        let pos = self
            .position(name)
            .ok_or_else(|| InventoryError::ContainerNotFound(name.to_string()))?;
        Ok(self.containers.remove(pos))
    }

    pub fn has_container(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// # Errors
    /// - `ContainerNotFound` if no container has that name
    pub fn get(&self, name: &str) -> Result<&Container, InventoryError> {
        self.position(name)
            .map(|pos| &self.containers[pos])
            .ok_or_else(|| InventoryError::ContainerNotFound(name.to_string()))
    }

    /// # Errors
    /// - `ContainerNotFound` if no container has that name
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Container, InventoryError> {
        match self.position(name) {
            Some(pos) => Ok(&mut self.containers[pos]),
            None => Err(InventoryError::ContainerNotFound(name.to_string())),
        }
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container_names(&self) -> Vec<&str> {
        self.containers.iter().map(|c| c.name.as_str()).collect()
    }

    /// Every held item with this name, in container order.
    ///
    /// # Errors
    /// - `ItemNotHeld` if no container has one
    pub fn find_item(&self, name: &str) -> Result<Vec<Found<'_>>, InventoryError> {
        let found: Vec<_> = self
            .containers
            .iter()
            .flat_map(|container| {
                container
                    .contents
                    .iter()
                    .filter(move |item| item.matches_name(name))
                    .map(move |item| Found { container, item })
            })
            .collect();
        if found.is_empty() {
            Err(InventoryError::ItemNotHeld(name.to_string()))
        } else {
            Ok(found)
        }
    }

    /// True if any container holds an item with this name.
    pub fn holding(&self, name: &str) -> bool {
        self.containers.iter().any(|c| c.has_item(name))
    }

    /// Put an item into the named container. On failure the item is handed back.
    ///
    /// # Errors
    /// - `ContainerNotFound`, `ContainerFull` or `CannotFit`
    pub fn insert_into(&mut self, container: &str, item: Item) -> Result<(), (InventoryError, Item)> {
        match self.get_mut(container) {
            Ok(target) => target.insert(item),
            Err(err) => Err((err, item)),
        }
    }

    /// Take the first item with this name out of whichever container holds it.
    /// Returns the name of that container with the item.
    ///
    /// # Errors
    /// - `ItemNotHeld` if nothing carried has that name
    pub fn take_item(&mut self, name: &str) -> Result<(String, Item), InventoryError> {
        let container = self
            .containers
            .iter_mut()
            .find(|c| c.has_item(name))
            .ok_or_else(|| InventoryError::ItemNotHeld(name.to_string()))?;
        let item = container.remove(name)?;
        Ok((container.name.clone(), item))
    }

    /// Move an item from one container to another.
    ///
    /// All checks happen before anything moves, so on error both containers
    /// are unchanged.
    ///
    /// # Errors
    /// - `ContainerNotFound` if either container is missing
    /// - `ItemNotFound` if the source doesn't hold the item
    /// - `ContainerFull` / `CannotFit` if the destination has no room
    pub fn swap_container_item(&mut self, source: &str, dest: &str, item: &str) -> Result<(), InventoryError> {
        let from = self
            .position(source)
            .ok_or_else(|| InventoryError::ContainerNotFound(source.to_string()))?;
        let to = self
            .position(dest)
            .ok_or_else(|| InventoryError::ContainerNotFound(dest.to_string()))?;
        let held = self.containers[from].get(item)?;
        if from == to {
            return Ok(());
        }
        self.containers[to].check_fit(held)?;
        let moving = self.containers[from].remove(item)?;
        self.containers[to].contents.push(moving);
        info!("inventory: moved '{item}' from '{source}' to '{dest}'");
        Ok(())
    }

    /// Listing of one container.
    ///
    /// # Errors
    /// - `ContainerNotFound` if no container has that name
    pub fn list_contents(&self, name: &str) -> Result<String, InventoryError> {
        Ok(self.get(name)?.list_contents())
    }

    /// Listing of every container.
    pub fn list_all_contents(&self) -> String {
        if self.containers.is_empty() {
            return "You aren't carrying anything to put things in.".to_string();
        }
        self.containers
            .iter()
            .map(Container::list_contents)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim().to_lowercase();
        self.containers.iter().position(|c| c.name.to_lowercase() == name)
    }
}
