//! GraphQL documents sent to the rental API.

pub const GET_VEHICLES: &str = r#"
query GetVehicles {
  vehicles {
    id
    name
    description
    primaryImage
    availableQuantity
    manufacturer { name }
    model { name }
  }
}"#;

pub const GET_VEHICLE: &str = r#"
query GetCarDetails($id: ID!) {
  vehicle(id: $id) {
    id
    name
    description
    manufacturer { id name }
    model { id name }
    vehicleTypes { id name }
    features {
      id
      engineType
      transmission
      horsepower
      torque
      fuelEfficiency
      dimensions
      weight
      safetyFeatures
      infotainment
      vehicleType { id }
    }
    availableQuantity
    primaryImage
    otherImages
    vehiclePrices {
      id
      price
      vehicleType { id name }
    }
  }
}"#;

pub const CREATE_BOOKING: &str = r#"
mutation CreateBooking($vehicleId: ID!, $userId: ID!, $userName: String!, $bookingDate: String!, $totalPrice: Float!) {
  createBooking(vehicleId: $vehicleId, userId: $userId, userName: $userName, bookingDate: $bookingDate, totalPrice: $totalPrice) {
    id
  }
}"#;

pub const LOGIN_USER: &str = r#"
mutation LoginUser($email: String!, $password: String!) {
  loginUser(email: $email, password: $password) {
    token
    user { id name email }
  }
}"#;

pub const LOGIN_ADMIN: &str = r#"
mutation LoginAdmin($email: String!, $password: String!) {
  loginAdmin(email: $email, password: $password) {
    token
    admin { id email }
  }
}"#;

pub const CREATE_USER: &str = r#"
mutation CreateUser($name: String!, $email: String!, $phone: String!, $city: String!, $state: String!, $country: String!, $pincode: String!, $password: String!) {
  createUser(name: $name, email: $email, phone: $phone, city: $city, state: $state, country: $country, pincode: $pincode, password: $password) {
    id
    name
    email
  }
}"#;

// Admin dashboard

pub const GET_USERS: &str = r#"
query GetUsers {
  users { id name email phone city state country pincode }
}"#;

pub const UPDATE_USER: &str = r#"
mutation UpdateUser($id: ID!, $name: String, $email: String, $phone: String, $city: String, $state: String, $country: String, $pincode: String) {
  updateUser(id: $id, name: $name, email: $email, phone: $phone, city: $city, state: $state, country: $country, pincode: $pincode) {
    id
  }
}"#;

pub const DELETE_USER: &str = r#"
mutation DeleteUser($id: ID!) {
  deleteUser(id: $id)
}"#;

pub const GET_ADMIN_VEHICLES: &str = r#"
query GetVehicles {
  vehicles {
    id
    name
    description
    primaryImage
    otherImages
    availableQuantity
    manufacturer { id name }
    model { id name }
    vehicleTypes { id name }
    features { id }
  }
}"#;

pub const CREATE_VEHICLE: &str = r#"
mutation CreateVehicle($name: String!, $description: String!, $primaryImage: String, $otherImages: [String], $availableQuantity: Int!, $manufacturerId: ID!, $modelId: ID!, $vehicleTypeIds: [ID!]!, $featuresId: [ID!]!) {
  createVehicle(name: $name, description: $description, primaryImage: $primaryImage, otherImages: $otherImages, availableQuantity: $availableQuantity, manufacturerId: $manufacturerId, modelId: $modelId, vehicleTypeIds: $vehicleTypeIds, featuresId: $featuresId) {
    id
  }
}"#;

pub const UPDATE_VEHICLE: &str = r#"
mutation UpdateVehicle($id: ID!, $name: String, $description: String, $primaryImage: String, $otherImages: [String], $availableQuantity: Int, $manufacturerId: ID, $modelId: ID, $vehicleTypeIds: [ID!], $featuresId: [ID!]) {
  updateVehicle(id: $id, name: $name, description: $description, primaryImage: $primaryImage, otherImages: $otherImages, availableQuantity: $availableQuantity, manufacturerId: $manufacturerId, modelId: $modelId, vehicleTypeIds: $vehicleTypeIds, featuresId: $featuresId) {
    id
  }
}"#;

pub const DELETE_VEHICLE: &str = r#"
mutation DeleteVehicle($id: ID!) {
  deleteVehicle(id: $id)
}"#;

pub const GET_VEHICLE_PRICES: &str = r#"
query GetVehiclePrices {
  vehiclePrices {
    id
    price
    vehicleType { id name }
    vehicle { id name }
  }
}"#;

pub const CREATE_VEHICLE_PRICE: &str = r#"
mutation CreateVehiclePrice($vehicleTypeId: ID!, $vehicleId: ID!, $price: Float!) {
  createVehiclePrice(vehicleTypeId: $vehicleTypeId, vehicleId: $vehicleId, price: $price) {
    id
  }
}"#;

pub const UPDATE_VEHICLE_PRICE: &str = r#"
mutation UpdateVehiclePrice($id: ID!, $vehicleTypeId: ID, $vehicleId: ID, $price: Float) {
  updateVehiclePrice(id: $id, vehicleTypeId: $vehicleTypeId, vehicleId: $vehicleId, price: $price) {
    id
  }
}"#;

pub const DELETE_VEHICLE_PRICE: &str = r#"
mutation DeleteVehiclePrice($id: ID!) {
  deleteVehiclePrice(id: $id)
}"#;

pub const GET_FEATURES: &str = r#"
query GetFeatures {
  features {
    id
    engineType
    transmission
    horsepower
    torque
    fuelEfficiency
    dimensions
    weight
    safetyFeatures
    infotainment
    vehicleType { id name }
  }
}"#;

pub const CREATE_FEATURE: &str = r#"
mutation createFeature($engineType: String!, $transmission: String!, $horsepower: Int, $torque: Int, $fuelEfficiency: Float, $dimensions: String, $weight: Float, $safetyFeatures: [String], $infotainment: String, $vehicleTypeId: ID!) {
  createFeatures(engineType: $engineType, transmission: $transmission, horsepower: $horsepower, torque: $torque, fuelEfficiency: $fuelEfficiency, dimensions: $dimensions, weight: $weight, safetyFeatures: $safetyFeatures, infotainment: $infotainment, vehicleTypeId: $vehicleTypeId) {
    id
  }
}"#;

pub const UPDATE_FEATURE: &str = r#"
mutation updateFeature($id: ID!, $engineType: String, $transmission: String, $horsepower: Int, $torque: Int, $fuelEfficiency: Float, $dimensions: String, $weight: Float, $safetyFeatures: [String], $infotainment: String) {
  updateFeatures(id: $id, engineType: $engineType, transmission: $transmission, horsepower: $horsepower, torque: $torque, fuelEfficiency: $fuelEfficiency, dimensions: $dimensions, weight: $weight, safetyFeatures: $safetyFeatures, infotainment: $infotainment) {
    id
  }
}"#;

pub const DELETE_FEATURE: &str = r#"
mutation deleteFeature($id: ID!) {
  deleteFeatures(id: $id)
}"#;

pub const GET_BOOKINGS: &str = r#"
query GetBookings {
  bookings {
    id
    vehicle { id name }
    user { id name }
    userName
    bookingDate
    totalPrice
  }
}"#;

pub const UPDATE_BOOKING: &str = r#"
mutation UpdateBooking($id: ID!, $vehicleId: ID, $userId: ID, $userName: String, $bookingDate: String, $totalPrice: Float) {
  updateBooking(id: $id, vehicleId: $vehicleId, userId: $userId, userName: $userName, bookingDate: $bookingDate, totalPrice: $totalPrice) {
    id
  }
}"#;

pub const DELETE_BOOKING: &str = r#"
mutation DeleteBooking($id: ID!) {
  deleteBooking(id: $id)
}"#;
