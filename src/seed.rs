//! Demo dataset loaded on a fresh start, matching the showroom the app ships
//! with: five vehicles and four customers, one of them holding an advance.

use crate::models::{
    CreateCustomer, CreateVehicle, PaymentEntry, PaymentType, VehicleStatus,
};
use crate::state::AppState;

impl AppState {
    pub fn seed_demo_data(&mut self) {
        if !self.inventory.is_empty() || !self.customers.is_empty() {
            return;
        }

        // Inserted oldest first so the list reads newest first, like real use.
        let vehicles = [
            ("FRM123456789", "ENG987654321", "Speedster X1", "Disc Brake", "Midnight Blue", VehicleStatus::Available, 85000.0),
            ("FRM123456790", "ENG987654322", "Speedster X1", "Drum Brake", "Scarlet Red", VehicleStatus::Booked, 78000.0),
            ("FRM123456791", "ENG987654323", "Cruiser 300", "Standard", "Matte Black", VehicleStatus::Sold, 150000.0),
            ("FRM123456792", "ENG987654324", "Scooty Pep", "ZX", "Yellow", VehicleStatus::Available, 65000.0),
            ("FRM123456793", "ENG987654325", "Cruiser 300", "Pro", "Silver", VehicleStatus::Available, 165000.0),
        ];
        for (frame_no, engine_no, model, variant, color, status, price) in vehicles {
            self.create_vehicle(CreateVehicle {
                frame_no: frame_no.to_string(),
                engine_no: engine_no.to_string(),
                model: model.to_string(),
                variant: variant.to_string(),
                color: color.to_string(),
                status,
                price,
            });
        }

        let rahul = self.create_customer(CreateCustomer {
            name: "Rahul Sharma".to_string(),
            relation_name: Some("S/o Ramesh Sharma".to_string()),
            mobile: "9876543210".to_string(),
            email: Some("rahul@example.com".to_string()),
            vehicle_details: Some("Speedster X1 - Midnight Blue".to_string()),
            balance: 20000.0,
        });
        // One part payment already on the books.
        if let Some(c) = self.customers.iter_mut().find(|c| c.id == rahul.id) {
            let entry = PaymentEntry {
                date: "2023-10-15".to_string(),
                amount: 5000.0,
                payment_type: PaymentType::Cash,
                description: "Part Payment".to_string(),
            };
            c.balance -= entry.amount;
            c.last_payment_date = entry.date.clone();
            c.history.insert(0, entry);
        }

        self.create_customer(CreateCustomer {
            name: "Anita Desai".to_string(),
            relation_name: Some("W/o Vikram Desai".to_string()),
            mobile: "9123456789".to_string(),
            email: Some("anita@example.com".to_string()),
            vehicle_details: Some("Scooty Pep - Yellow".to_string()),
            balance: 0.0,
        });

        self.create_customer(CreateCustomer {
            name: "Vikram Singh".to_string(),
            relation_name: Some("S/o Balwant Singh".to_string()),
            mobile: "9988776655".to_string(),
            email: None,
            vehicle_details: Some("Cruiser 300 - Black".to_string()),
            balance: 45000.0,
        });

        // Advance held for the customer.
        self.create_customer(CreateCustomer {
            name: "Priya Patel".to_string(),
            relation_name: None,
            mobile: "8877665544".to_string(),
            email: None,
            vehicle_details: None,
            balance: -2000.0,
        });
    }
}
