pub mod p900_service_pricing;
