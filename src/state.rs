#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TurnState {
    Resting,  // Shown page is fully visible, nothing in flight
    Exiting,  // Shown page is rotating out and fading
    Entering, // Target page is springing in from the left edge
}
